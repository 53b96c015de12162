use crate::api::controllers::dto::category_dto::CreateCategoryRequest;
use crate::api::errors::APIErrors;
use crate::api::extractors::{Admin, ApiJson, Authorized, DbConn};
use crate::api::response::CreatedResponse;
use crate::services::catalog_service::CatalogService;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn create_category(
    _: Authorized<Admin>,
    DbConn(mut conn): DbConn,
    ApiJson(payload): ApiJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    let category_id = CatalogService::new()
        .add_category(&mut conn, &payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Categoría creada correctamente.", category_id)),
    ))
}
