use crate::api::controllers::dto::order_dto::{
    CheckoutRequest, OrderResponse, UpdateOrderStatusRequest,
};
use crate::api::errors::APIErrors;
use crate::api::extractors::{ApiJson, Authorized, Bodeguero, DbConn, Vendedor};
use crate::api::response::{CreatedResponse, MessageResponse};
use crate::security::jwt::AccessClaims;
use crate::services::order_service::OrderService;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Cart checkout for any signed-in user
pub async fn create_order(
    claims: AccessClaims,
    DbConn(mut conn): DbConn,
    ApiJson(payload): ApiJson<CheckoutRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    let order_id = OrderService::new()
        .checkout(&mut conn, claims.id, payload.product_id, payload.quantity)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Orden realizada con éxito.", order_id)),
    ))
}

/// Seller sets an arbitrary status
pub async fn update_order_status(
    _: Authorized<Vendedor>,
    DbConn(mut conn): DbConn,
    Path(order_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    OrderService::new()
        .update_order_status(&mut conn, order_id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Pedido actualizado con éxito.")),
    ))
}

/// Orders waiting in the warehouse
pub async fn get_pending_orders(
    _: Authorized<Bodeguero>,
    DbConn(mut conn): DbConn,
) -> Result<impl IntoResponse, APIErrors> {
    let orders: Vec<OrderResponse> = OrderService::new()
        .get_pending_orders(&mut conn)
        .await?
        .into_iter()
        .map(OrderResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(orders)))
}

pub async fn prepare_order(
    _: Authorized<Bodeguero>,
    DbConn(mut conn): DbConn,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, APIErrors> {
    OrderService::new().prepare_order(&mut conn, order_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Pedido preparado con éxito.")),
    ))
}
