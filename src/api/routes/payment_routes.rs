use crate::api::controllers::payment_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pagos", post(payment_controller::create_payment))
        .route(
            "/pagos/confirmar/{payment_id}",
            put(payment_controller::confirm_payment),
        )
}
