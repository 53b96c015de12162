mod common;

#[tokio::test]
#[serial_test::serial]
pub async fn test_database_connection() {
    let Some(state) = common::setup().await else { return };

    let conn = state.db.get_connection().await;

    assert!(conn.is_ok(), "Failed to get a database connection");
}

#[tokio::test]
#[serial_test::serial]
pub async fn test_create_tables_is_idempotent() {
    let Some(state) = common::setup().await else { return };
    let mut conn = state.db.get_connection().await.unwrap();

    let result = tienda_server_lib::data::bootstrap::create_tables(&mut conn).await;

    assert!(result.is_ok(), "Second bootstrap failed: {:?}", result.err());
}
