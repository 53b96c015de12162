use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::repos::traits::repository::{Repository, last_insert_id};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    /// Retrieves all orders with a specific status.
    pub async fn get_by_status(
        &self,
        conn: &mut AsyncMysqlConnection,
        status_query: &str,
    ) -> Result<Option<Vec<Order>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders, status};

        match orders
            .filter(status.eq(status_query))
            .order(id.asc())
            .select(Order::as_select())
            .load::<Order>(conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn update<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        order_id: i32,
        item: UpdateOrder<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders};

        diesel::update(orders.filter(id.eq(order_id)))
            .set(&item)
            .execute(conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem<'a> = NewOrder;

    async fn get_all(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders};

        match orders
            .order(id.asc())
            .select(Order::as_select())
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
        order_id: Self::Id,
    ) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{id, orders};

        orders
            .filter(id.eq(order_id))
            .select(Order::as_select())
            .first::<Self::Item>(conn)
            .await
            .optional()
    }

    async fn add<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        item: Self::NewItem<'a>,
    ) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(orders)
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

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}
