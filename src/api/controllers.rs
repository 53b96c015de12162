pub mod category_controller;
pub mod dto;
pub mod order_controller;
pub mod payment_controller;
pub mod product_controller;
pub mod user_controller;
