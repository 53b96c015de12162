use diesel::result;
use diesel::sql_query;
use diesel_async::{AsyncMysqlConnection, RunQueryDsl};

// Parents before children so the foreign keys resolve.
const CREATE_TABLES: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS users (
        id INT AUTO_INCREMENT PRIMARY KEY,
        username VARCHAR(80) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        role VARCHAR(20) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS categories (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(50) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id INT AUTO_INCREMENT PRIMARY KEY,
        code VARCHAR(20) NOT NULL UNIQUE,
        brand VARCHAR(50) NOT NULL,
        name VARCHAR(100) NOT NULL,
        price DECIMAL(10, 2) NOT NULL CHECK (price >= 0),
        stock INT NOT NULL CHECK (stock >= 0),
        category_id INT NOT NULL,
        FOREIGN KEY (category_id) REFERENCES categories (id)
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id INT AUTO_INCREMENT PRIMARY KEY,
        user_id INT NOT NULL,
        product_id INT NOT NULL,
        quantity INT NOT NULL,
        total_price DECIMAL(12, 2) NOT NULL,
        status VARCHAR(20) NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users (id),
        FOREIGN KEY (product_id) REFERENCES products (id)
    )",
    "CREATE TABLE IF NOT EXISTS payments (
        id INT AUTO_INCREMENT PRIMARY KEY,
        order_id INT NOT NULL,
        payment_type VARCHAR(20) NOT NULL,
        confirmed BOOLEAN NOT NULL DEFAULT FALSE,
        FOREIGN KEY (order_id) REFERENCES orders (id)
    )",
];

/// Creates any missing table. Existing tables are left untouched.
pub async fn create_tables(conn: &mut AsyncMysqlConnection) -> Result<(), result::Error> {
    for statement in CREATE_TABLES {
        sql_query(statement).execute(conn).await?;
    }

    tracing::info!("Database tables ready");

    Ok(())
}
