use crate::data::models::user::{NewUser, User};
use crate::data::repos::traits::repository::{Repository, last_insert_id};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct UserRepo {}

impl UserRepo {
    pub fn new() -> Self {
        UserRepo {}
    }

    pub async fn get_by_username(
        &self,
        conn: &mut AsyncMysqlConnection,
        username_query: &str,
    ) -> Result<Option<User>, result::Error> {
        use crate::data::models::schema::users::dsl::{username, users};

        users
            .filter(username.eq(username_query))
            .select(User::as_select())
            .first::<User>(conn)
            .await
            .optional()
    }
}

#[async_trait]
impl Repository for UserRepo {
    type Id = i32;
    type Item = User;
    type NewItem<'a> = NewUser<'a>;

    async fn get_all(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::users::dsl::{id, users};

        match users
            .order(id.asc())
            .select(User::as_select())
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
        user_id: Self::Id,
    ) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::users::dsl::{id, users};

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first::<Self::Item>(conn)
            .await
            .optional()
    }

    async fn add<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        item: Self::NewItem<'a>,
    ) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::users::dsl::users;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(users)
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

impl Default for UserRepo {
    fn default() -> Self {
        Self::new()
    }
}
