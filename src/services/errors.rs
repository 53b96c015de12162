use crate::security::errors::AuthError;
use bigdecimal::BigDecimal;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unknown role: {0}")]
    InvalidRole(String),
    #[error("Username longer than {0} characters")]
    UsernameTooLong(usize),
    #[error("Username already taken")]
    DuplicateUser,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
}

#[derive(Debug, Error)]
pub enum OrderServiceError {
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i32),
    #[error("Product missing or out of stock")]
    ProductUnavailable,
    #[error("Order total {0} exceeds the storable maximum")]
    TotalOutOfRange(BigDecimal),
    #[error("Order not found")]
    OrderNotFound,
    #[error("Invalid order status: {0:?}")]
    InvalidStatus(String),
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
}

#[derive(Debug, Error)]
pub enum PaymentServiceError {
    #[error("Invalid payment type: {0:?}")]
    InvalidPaymentType(String),
    #[error("Order not found")]
    OrderNotFound,
    #[error("Payment not found")]
    PaymentNotFound,
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
}

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("Invalid value for {0}")]
    InvalidField(&'static str),
    #[error("Category not found")]
    CategoryNotFound,
    #[error("Category already exists")]
    CategoryAlreadyExists,
    #[error("Product code already exists")]
    ProductAlreadyExists,
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
}

pub(crate) fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

pub(crate) fn is_foreign_key_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
    )
}
