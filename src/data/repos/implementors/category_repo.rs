use crate::data::models::category::{Category, NewCategory};
use crate::data::repos::traits::repository::{Repository, last_insert_id};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct CategoryRepo {}

impl CategoryRepo {
    pub fn new() -> Self {
        CategoryRepo {}
    }
}

#[async_trait]
impl Repository for CategoryRepo {
    type Id = i32;
    type Item = Category;
    type NewItem<'a> = NewCategory<'a>;

    async fn get_all(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        match categories
            .order(id.asc())
            .select(Category::as_select())
            .load::<Self::Item>(conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(
        &self,
        conn: &mut AsyncMysqlConnection,
        category_id: Self::Id,
    ) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, id};

        categories
            .filter(id.eq(category_id))
            .select(Category::as_select())
            .first::<Self::Item>(conn)
            .await
            .optional()
    }

    async fn add<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        item: Self::NewItem<'a>,
    ) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(categories)
                    .values(&item)
                    .execute(connection)
                    .await?;
                last_insert_id(connection).await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for CategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}
