use crate::api::response::MessageResponse;
use crate::services::errors::{
    CatalogServiceError, OrderServiceError, PaymentServiceError, UserServiceError,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Every failure a handler can answer with. The body is always `{"mensaje": ...}`.
#[derive(Debug, Error, PartialEq)]
pub enum APIErrors {
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("Token de acceso ausente o inválido")]
    Unauthorized,
    #[error("No autorizado")]
    Forbidden,
    #[error("Faltan campos requeridos")]
    MissingField,
    #[error("Rol inválido")]
    InvalidRole,
    #[error("El usuario ya existe")]
    DuplicateUser,
    #[error("Producto no disponible o stock insuficiente")]
    ProductUnavailable,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Error interno del servidor")]
    Internal,
}

impl APIErrors {
    pub fn status_code(&self) -> StatusCode {
        match self {
            APIErrors::InvalidCredentials | APIErrors::Unauthorized => StatusCode::UNAUTHORIZED,
            APIErrors::Forbidden => StatusCode::FORBIDDEN,
            APIErrors::MissingField
            | APIErrors::InvalidRole
            | APIErrors::DuplicateUser
            | APIErrors::ProductUnavailable
            | APIErrors::BadRequest(_) => StatusCode::BAD_REQUEST,
            APIErrors::NotFound(_) => StatusCode::NOT_FOUND,
            APIErrors::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let body = MessageResponse::new(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for APIErrors {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        APIErrors::BadRequest("Cuerpo de la solicitud inválido".to_string())
    }
}

impl From<UserServiceError> for APIErrors {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::MissingField(_) => APIErrors::MissingField,
            UserServiceError::InvalidRole(_) => APIErrors::InvalidRole,
            UserServiceError::UsernameTooLong(max) => APIErrors::BadRequest(format!(
                "El nombre de usuario no puede superar {max} caracteres"
            )),
            UserServiceError::DuplicateUser => APIErrors::DuplicateUser,
            UserServiceError::InvalidCredentials => APIErrors::InvalidCredentials,
            UserServiceError::Auth(_) | UserServiceError::Database(_) => {
                tracing::error!("User service failure: {}", err);
                APIErrors::Internal
            }
        }
    }
}

impl From<OrderServiceError> for APIErrors {
    fn from(err: OrderServiceError) -> Self {
        match err {
            OrderServiceError::InvalidQuantity(_) => {
                APIErrors::BadRequest("La cantidad debe ser mayor que cero".to_string())
            }
            OrderServiceError::ProductUnavailable => APIErrors::ProductUnavailable,
            OrderServiceError::TotalOutOfRange(_) => {
                APIErrors::BadRequest("El total del pedido supera el máximo permitido".to_string())
            }
            OrderServiceError::OrderNotFound => {
                APIErrors::NotFound("Pedido no encontrado".to_string())
            }
            OrderServiceError::InvalidStatus(_) => {
                APIErrors::BadRequest("Estado de pedido inválido".to_string())
            }
            OrderServiceError::Database(_) => {
                tracing::error!("Order service failure: {}", err);
                APIErrors::Internal
            }
        }
    }
}

impl From<PaymentServiceError> for APIErrors {
    fn from(err: PaymentServiceError) -> Self {
        match err {
            PaymentServiceError::InvalidPaymentType(_) => {
                APIErrors::BadRequest("Tipo de pago inválido".to_string())
            }
            PaymentServiceError::OrderNotFound => {
                APIErrors::NotFound("Pedido no encontrado".to_string())
            }
            PaymentServiceError::PaymentNotFound => {
                APIErrors::NotFound("Pago no encontrado".to_string())
            }
            PaymentServiceError::Database(_) => {
                tracing::error!("Payment service failure: {}", err);
                APIErrors::Internal
            }
        }
    }
}

impl From<CatalogServiceError> for APIErrors {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::InvalidField(field) => {
                APIErrors::BadRequest(format!("Valor inválido para {field}"))
            }
            CatalogServiceError::CategoryNotFound => {
                APIErrors::NotFound("La categoría especificada no existe".to_string())
            }
            CatalogServiceError::CategoryAlreadyExists => {
                APIErrors::BadRequest("La categoría ya existe".to_string())
            }
            CatalogServiceError::ProductAlreadyExists => {
                APIErrors::BadRequest("El código de producto ya existe".to_string())
            }
            CatalogServiceError::Database(_) => {
                tracing::error!("Catalog service failure: {}", err);
                APIErrors::Internal
            }
        }
    }
}
