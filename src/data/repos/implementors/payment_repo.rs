use crate::data::models::payment::{NewPayment, Payment, UpdatePayment};
use crate::data::repos::traits::repository::{Repository, last_insert_id};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};

pub struct PaymentRepo {}

impl PaymentRepo {
    pub fn new() -> Self {
        PaymentRepo {}
    }

    pub async fn update(
        &self,
        conn: &mut AsyncMysqlConnection,
        payment_id: i32,
        item: UpdatePayment,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::payments::dsl::{id, payments};

        diesel::update(payments.filter(id.eq(payment_id)))
            .set(&item)
            .execute(conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Repository for PaymentRepo {
    type Id = i32;
    type Item = Payment;
    type NewItem<'a> = NewPayment<'a>;

    async fn get_all(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::payments::dsl::{id, payments};

        match payments
            .order(id.asc())
            .select(Payment::as_select())
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
        payment_id: Self::Id,
    ) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::payments::dsl::{id, payments};

        payments
            .filter(id.eq(payment_id))
            .select(Payment::as_select())
            .first::<Self::Item>(conn)
            .await
            .optional()
    }

    async fn add<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        item: Self::NewItem<'a>,
    ) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::payments::dsl::payments;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(payments)
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

impl Default for PaymentRepo {
    fn default() -> Self {
        Self::new()
    }
}
