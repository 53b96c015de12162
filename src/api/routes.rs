pub mod auth_routes;
pub mod order_routes;
pub mod payment_routes;
pub mod product_routes;
