use crate::api::errors::APIErrors;
use crate::api::state::AppState;
use crate::data::models::roles::Role;
use crate::security::jwt::AccessClaims;
use axum::RequestPartsExt;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::Object;
use std::marker::PhantomData;

/// Any caller holding a valid identity token.
impl FromRequestParts<AppState> for AccessClaims {
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::debug!("Missing or malformed authorization header");
                APIErrors::Unauthorized
            })?;

        state.jwt.decode_token::<AccessClaims>(bearer.token()).map_err(|e| {
            tracing::debug!("Token decoding error: {}", e);
            APIErrors::Unauthorized
        })
    }
}

/// Names the single role a route accepts.
pub trait RequiredRole: Send + Sync + 'static {
    const ROLE: Role;
}

pub struct Admin;
pub struct Vendedor;
pub struct Bodeguero;
pub struct Contador;

impl RequiredRole for Admin {
    const ROLE: Role = Role::Admin;
}

impl RequiredRole for Vendedor {
    const ROLE: Role = Role::Vendedor;
}

impl RequiredRole for Bodeguero {
    const ROLE: Role = Role::Bodeguero;
}

impl RequiredRole for Contador {
    const ROLE: Role = Role::Contador;
}

/// Valid token whose role is exactly `R::ROLE`; there is no role hierarchy.
///
/// Put it before any other extractor so a rejected caller never reaches the
/// database or the body.
pub struct Authorized<R: RequiredRole> {
    pub claims: AccessClaims,
    _role: PhantomData<R>,
}

impl<R: RequiredRole> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = AccessClaims::from_request_parts(parts, state).await?;

        if claims.role != R::ROLE {
            tracing::warn!(
                user_id = claims.id,
                role = %claims.role,
                required = %R::ROLE,
                "Role check failed"
            );
            return Err(APIErrors::Forbidden);
        }

        Ok(Authorized {
            claims,
            _role: PhantomData,
        })
    }
}

/// Pooled connection checked out for the lifetime of one request.
pub struct DbConn(pub Object<AsyncMysqlConnection>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = APIErrors;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.db.get_connection().await.map(DbConn).map_err(|e| {
            tracing::error!("Failed to get a database connection: {}", e);
            APIErrors::Internal
        })
    }
}

/// `Json` whose rejection is a 400 with the usual message body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(APIErrors))]
pub struct ApiJson<T>(pub T);
