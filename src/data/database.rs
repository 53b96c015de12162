use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{BuildError, Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, deadpool};

/// Handle to the connection pool. Cloning is cheap and shares the same pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    /// Builds the pool. No connection is opened until the first checkout.
    pub fn new(database_url: &str) -> Result<Self, BuildError> {
        let manager = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = Pool::builder(manager).build()?;

        tracing::info!("DB connection pool created");

        Ok(Database { pool })
    }

    pub async fn get_connection(
        &self,
    ) -> Result<Object<AsyncMysqlConnection>, deadpool::PoolError> {
        self.pool.get().await
    }
}
