use async_trait::async_trait;
use diesel::result;
use diesel_async::AsyncMysqlConnection;

/// Common persistence operations. The caller owns the connection so several
/// repositories can share one transaction.
#[async_trait]
pub trait Repository {
    type Id: Send;
    type Item: Send;
    type NewItem<'a>: Send;

    async fn get_all(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Option<Vec<Self::Item>>, result::Error>;

    async fn get_by_id(
        &self,
        conn: &mut AsyncMysqlConnection,
        id: Self::Id,
    ) -> Result<Option<Self::Item>, result::Error>;

    /// Inserts the row and returns its generated id.
    async fn add<'a>(
        &self,
        conn: &mut AsyncMysqlConnection,
        item: Self::NewItem<'a>,
    ) -> Result<Self::Id, result::Error>;
}

/// Id generated by the last insert on this connection.
pub async fn last_insert_id(conn: &mut AsyncMysqlConnection) -> Result<i32, result::Error> {
    use diesel::sql_types::{BigInt, Unsigned};
    use diesel_async::RunQueryDsl;

    let id: u64 = diesel::select(diesel::dsl::sql::<Unsigned<BigInt>>("LAST_INSERT_ID()"))
        .get_result(conn)
        .await?;

    i32::try_from(id).map_err(|e| result::Error::DeserializationError(Box::new(e)))
}
