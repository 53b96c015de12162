#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use bigdecimal::BigDecimal;
use diesel_async::RunQueryDsl;
use http_body_util::BodyExt;
use serde_json::Value;
use std::str::FromStr;
use tienda_server_lib::api::config::Config;
use tienda_server_lib::api::server::router;
use tienda_server_lib::api::state::AppState;
use tienda_server_lib::data::bootstrap;
use tienda_server_lib::data::database::Database;
use tienda_server_lib::data::models::roles::Role;
use tienda_server_lib::data::repos::implementors::user_repo::UserRepo;
use tienda_server_lib::services::catalog_service::{CatalogService, ProductDraft};
use tienda_server_lib::services::user_service::UserService;
use tower::ServiceExt;

/// Fresh state over an emptied database, or `None` when no database is configured.
pub async fn setup() -> Option<AppState> {
    dotenvy::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return None;
    };

    let config = Config {
        database_url,
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expiration_minutes: 15,
        bind_address: "127.0.0.1:0".parse().unwrap(),
    };
    let db = Database::new(&config.database_url).expect("Failed to build pool");

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    bootstrap::create_tables(&mut conn)
        .await
        .expect("Failed to create tables");

    use tienda_server_lib::data::models::schema::{categories, orders, payments, products, users};

    // Children first because of the foreign keys
    diesel::delete(payments::table).execute(&mut conn).await.unwrap();
    diesel::delete(orders::table).execute(&mut conn).await.unwrap();
    diesel::delete(products::table).execute(&mut conn).await.unwrap();
    diesel::delete(categories::table).execute(&mut conn).await.unwrap();
    diesel::delete(users::table).execute(&mut conn).await.unwrap();

    Some(AppState::new(&config, db))
}

/// Registers a user and returns its id with a valid token.
pub async fn create_user(state: &AppState, username: &str, role: Role) -> (i32, String) {
    let mut conn = state.db.get_connection().await.unwrap();

    let user_id = UserService::new()
        .register(&mut conn, Some(username), Some("password123"), Some(role.as_str()))
        .await
        .expect("Failed to register user");

    let user = UserRepo::new()
        .get_by_username(&mut conn, username)
        .await
        .unwrap()
        .expect("User not found");

    (user_id, state.jwt.generate_token(&user).unwrap())
}

pub async fn create_category(state: &AppState, name: &str) -> i32 {
    let mut conn = state.db.get_connection().await.unwrap();

    CatalogService::new()
        .add_category(&mut conn, name)
        .await
        .expect("Failed to add category")
}

pub async fn create_product(
    state: &AppState,
    code: &str,
    price: &str,
    stock: i32,
    category_id: i32,
) -> i32 {
    let mut conn = state.db.get_connection().await.unwrap();

    let draft = ProductDraft {
        code,
        brand: "Marca",
        name: "Producto de prueba",
        price: BigDecimal::from_str(price).unwrap(),
        stock,
        category_id,
    };

    CatalogService::new()
        .add_product(&mut conn, draft)
        .await
        .expect("Failed to add product")
}

/// Sends one request through the full router; returns the status and JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = router(state.clone())
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Prices go over the wire as JSON numbers, with their scale preserved.
pub fn decimal(value: &Value) -> BigDecimal {
    match value {
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).unwrap(),
        other => panic!("not a JSON number: {other}"),
    }
}
