pub mod category_repo;
pub mod order_repo;
pub mod payment_repo;
pub mod product_repo;
pub mod user_repo;
