use crate::api::controllers::dto::payment_dto::CreatePaymentRequest;
use crate::api::errors::APIErrors;
use crate::api::extractors::{ApiJson, Authorized, Contador, DbConn};
use crate::api::response::{CreatedResponse, MessageResponse};
use crate::security::jwt::AccessClaims;
use crate::services::payment_service::PaymentService;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn create_payment(
    claims: AccessClaims,
    DbConn(mut conn): DbConn,
    ApiJson(payload): ApiJson<CreatePaymentRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    let payment_id = PaymentService::new()
        .register_payment(&mut conn, payload.order_id, &payload.payment_type)
        .await?;

    tracing::debug!(payment_id, user_id = claims.id, "Payment submitted");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Pago registrado con éxito.", payment_id)),
    ))
}

pub async fn confirm_payment(
    _: Authorized<Contador>,
    DbConn(mut conn): DbConn,
    Path(payment_id): Path<i32>,
) -> Result<impl IntoResponse, APIErrors> {
    PaymentService::new()
        .confirm_payment(&mut conn, payment_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Pago confirmado con éxito.")),
    ))
}
