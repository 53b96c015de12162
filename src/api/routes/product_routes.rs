use crate::api::controllers::{category_controller, product_controller};
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalogo", get(product_controller::get_catalog))
        .route("/almacen/productos", get(product_controller::get_warehouse_products))
        .route("/productos", post(product_controller::create_product))
        .route("/categorias", post(category_controller::create_category))
}
