use tienda_server_lib::api::config::Config;
use tienda_server_lib::api::server;
use tienda_server_lib::api::state::AppState;
use tienda_server_lib::data::bootstrap;
use tienda_server_lib::data::database::Database;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tienda_server=debug,tienda_server_lib=debug,tower_http=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let db = Database::new(&config.database_url)?;

    {
        let mut conn = db.get_connection().await?;
        bootstrap::create_tables(&mut conn).await?;
    }

    let listener = TcpListener::bind(config.bind_address).await?;
    server::start(listener, AppState::new(&config, db)).await?;

    Ok(())
}
