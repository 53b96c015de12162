use crate::api::controllers::dto::user_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::api::errors::APIErrors;
use crate::api::extractors::{ApiJson, DbConn};
use crate::api::response::MessageResponse;
use crate::api::state::AppState;
use crate::services::user_service::UserService;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn register_user(
    DbConn(mut conn): DbConn,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    let service = UserService::new();

    service
        .register(
            &mut conn,
            payload.username.as_deref(),
            payload.password.as_deref(),
            payload.role.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Usuario creado correctamente.")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    DbConn(mut conn): DbConn,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, APIErrors> {
    let service = UserService::new();

    let access_token = service
        .login(
            &mut conn,
            &state.jwt,
            payload.username.as_deref(),
            payload.password.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(LoginResponse { access_token })))
}
