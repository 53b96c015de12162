use crate::api::controllers::dto::product_dto::{CreateProductRequest, ProductResponse};
use crate::api::errors::APIErrors;
use crate::api::extractors::{Admin, ApiJson, Authorized, DbConn, Vendedor};
use crate::api::response::CreatedResponse;
use crate::services::catalog_service::CatalogService;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use diesel_async::AsyncMysqlConnection;

async fn list_products(conn: &mut AsyncMysqlConnection) -> Result<Json<Vec<ProductResponse>>, APIErrors> {
    let products = CatalogService::new()
        .get_catalog(conn)
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(Json(products))
}

/// Public catalog
pub async fn get_catalog(DbConn(mut conn): DbConn) -> Result<impl IntoResponse, APIErrors> {
    list_products(&mut conn).await
}

/// Same listing, for sellers checking stock
pub async fn get_warehouse_products(
    _: Authorized<Vendedor>,
    DbConn(mut conn): DbConn,
) -> Result<impl IntoResponse, APIErrors> {
    list_products(&mut conn).await
}

pub async fn create_product(
    _: Authorized<Admin>,
    DbConn(mut conn): DbConn,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    let product_id = CatalogService::new()
        .add_product(&mut conn, (&payload).into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Producto creado correctamente.", product_id)),
    ))
}
