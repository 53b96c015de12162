pub mod category_dto;
pub mod order_dto;
pub mod payment_dto;
pub mod product_dto;
pub mod user_dto;
