mod common;

use axum::http::StatusCode;
use common::{create_user, send, setup};
use serde_json::json;
use tienda_server_lib::data::models::roles::Role;
use tienda_server_lib::data::repos::implementors::user_repo::UserRepo;
use tienda_server_lib::data::repos::traits::repository::Repository;
use tienda_server_lib::security::jwt::AccessClaims;

async fn user_count(state: &tienda_server_lib::api::state::AppState) -> usize {
    let mut conn = state.db.get_connection().await.unwrap();
    UserRepo::new()
        .get_all(&mut conn)
        .await
        .unwrap()
        .map(|users| users.len())
        .unwrap_or(0)
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_user() {
    let Some(state) = setup().await else { return };

    let (status, body) = send(
        &state,
        "POST",
        "/register",
        None,
        Some(json!({ "username": "ana", "password": "secreto", "role": "cliente" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensaje"], "Usuario creado correctamente.");

    let mut conn = state.db.get_connection().await.unwrap();
    let user = UserRepo::new()
        .get_by_username(&mut conn, "ana")
        .await
        .unwrap()
        .expect("User not stored");
    assert_eq!(user.role, Role::Cliente);
    assert_ne!(user.password, "secreto");
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_duplicate_username() {
    let Some(state) = setup().await else { return };
    let payload = json!({ "username": "ana", "password": "secreto", "role": "cliente" });

    let (first, _) = send(&state, "POST", "/register", None, Some(payload.clone())).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(user_count(&state).await, 1);

    let (second, body) = send(&state, "POST", "/register", None, Some(payload)).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensaje"], "El usuario ya existe");
    assert_eq!(user_count(&state).await, 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_missing_fields() {
    let Some(state) = setup().await else { return };

    for payload in [
        json!({ "password": "secreto", "role": "cliente" }),
        json!({ "username": "ana", "role": "cliente" }),
        json!({ "username": "ana", "password": "secreto" }),
        json!({ "username": "", "password": "secreto", "role": "cliente" }),
    ] {
        let (status, body) = send(&state, "POST", "/register", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["mensaje"], "Faltan campos requeridos");
    }

    assert_eq!(user_count(&state).await, 0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_unknown_role() {
    let Some(state) = setup().await else { return };

    let (status, body) = send(
        &state,
        "POST",
        "/register",
        None,
        Some(json!({ "username": "ana", "password": "secreto", "role": "gerente" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensaje"], "Rol inválido");
    assert_eq!(user_count(&state).await, 0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_register_username_length() {
    let Some(state) = setup().await else { return };

    let (status, _) = send(
        &state,
        "POST",
        "/register",
        None,
        Some(json!({ "username": "a".repeat(81), "password": "secreto", "role": "cliente" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(user_count(&state).await, 0);

    let (status, _) = send(
        &state,
        "POST",
        "/register",
        None,
        Some(json!({ "username": "b".repeat(80), "password": "secreto", "role": "cliente" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user_count(&state).await, 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_success() {
    let Some(state) = setup().await else { return };
    let (user_id, _) = create_user(&state, "bruno", Role::Contador).await;

    let (status, body) = send(
        &state,
        "POST",
        "/login",
        None,
        Some(json!({ "username": "bruno", "password": "password123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().expect("No token issued");

    let claims: AccessClaims = state.jwt.decode_token(token).unwrap();
    assert_eq!(claims.id, user_id);
    assert_eq!(claims.username, "bruno");
    assert_eq!(claims.role, Role::Contador);
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_wrong_password() {
    let Some(state) = setup().await else { return };
    create_user(&state, "bruno", Role::Cliente).await;

    let (status, body) = send(
        &state,
        "POST",
        "/login",
        None,
        Some(json!({ "username": "bruno", "password": "incorrecta" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["mensaje"], "Credenciales inválidas");
    assert!(body.get("access_token").is_none());
}

#[tokio::test]
#[serial_test::serial]
async fn test_login_unknown_user() {
    let Some(state) = setup().await else { return };

    let (status, body) = send(
        &state,
        "POST",
        "/login",
        None,
        Some(json!({ "username": "nadie", "password": "password123" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.get("access_token").is_none());
}
