use crate::api::routes::{auth_routes, order_routes, payment_routes, product_routes};
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Every route of the API bound to `state`.
pub fn router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Tienda Server API is running!" }))
        .merge(auth_routes::routes())
        .merge(product_routes::routes())
        .merge(order_routes::routes())
        .merge(payment_routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Serves until Ctrl-C, then drains in-flight requests.
pub async fn start(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::Config;
    use crate::data::database::Database;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn banner_is_served_without_a_database() {
        let config = Config {
            database_url: "mysql://nobody@127.0.0.1:1/none".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_minutes: 15,
            bind_address: "127.0.0.1:0".parse().unwrap(),
        };
        let state = AppState::new(&config, Database::new(&config.database_url).unwrap());

        let response = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Tienda Server API is running!");
    }
}
