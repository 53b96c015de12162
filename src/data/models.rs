pub mod category;
pub mod order;
pub mod payment;
pub mod product;
pub mod roles;
pub mod schema;
pub mod user;
