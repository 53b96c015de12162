use crate::api::controllers::order_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post, put};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/carrito", post(order_controller::create_order))
        .route(
            "/pedidos/administrar/{order_id}",
            put(order_controller::update_order_status),
        )
        .route("/almacen/pedidos", get(order_controller::get_pending_orders))
        .route(
            "/almacen/pedidos/{order_id}",
            put(order_controller::prepare_order),
        )
}
