use crate::data::models::product::{NewProduct, Product};
use crate::data::repos::traits::repository::{Repository, last_insert_id};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct ProductRepo {}

impl ProductRepo {
    pub fn new() -> Self {
        ProductRepo {}
    }

    /// Every product paired with the name of its category, ordered by id.
    pub async fn get_all_with_category(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Vec<(Product, String)>, result::Error> {
        use crate::data::models::schema::categories;
        use crate::data::models::schema::products;

        products::table
            .inner_join(categories::table)
            .order(products::id.asc())
            .select((Product::as_select(), categories::name))
            .load::<(Product, String)>(conn)
            .await
    }

    /// Takes `quantity` units out of stock only if that many are available.
    /// Returns `false` when the product is missing or short on stock.
    pub async fn decrement_stock(
        &self,
        conn: &mut AsyncMysqlConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<bool, result::Error> {
        use crate::data::models::schema::products::dsl::{id, products, stock};

        let affected = diesel::update(
            products
                .filter(id.eq(product_id))
                .filter(stock.ge(quantity)),
        )
        .set(stock.eq(stock - quantity))
        .execute(conn)
        .await?;

        Ok(affected == 1)
    }
}

#[async_trait]
impl Repository for ProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem<'a> = NewProduct<'a>;

    async fn get_all(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::products::dsl::{id, products};

        match products
            .order(id.asc())
            .select(Product::as_select())
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
        product_id: Self::Id,
    ) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::products::dsl::{id, products};

        products
            .filter(id.eq(product_id))
            .select(Product::as_select())
            .first::<Self::Item>(conn)
            .await
            .optional()
    }

    async fn add<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        item: Self::NewItem<'a>,
    ) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(products)
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

impl Default for ProductRepo {
    fn default() -> Self {
        Self::new()
    }
}
