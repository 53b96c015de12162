use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::OrderServiceError;
use bigdecimal::BigDecimal;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection};

const MAX_STATUS_LEN: usize = 20;
/// `total_price` is `DECIMAL(12, 2)`.
const TOTAL_PRICE_LIMIT: u64 = 10_000_000_000;

/// Statuses the system itself assigns. Sellers may set any other label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Prepared,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::Prepared => "preparado",
        }
    }
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Places an order for `quantity` units of a product at its current price and
    /// takes them out of stock. Both writes commit together or not at all.
    pub async fn checkout(
        &self,
        conn: &mut AsyncMysqlConnection,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<i32, OrderServiceError> {
        if quantity <= 0 {
            return Err(OrderServiceError::InvalidQuantity(quantity));
        }

        let order_id = conn
            .transaction::<_, OrderServiceError, _>(|conn| {
                async move {
                    let product_repo = ProductRepo::new();

                    let product = product_repo
                        .get_by_id(conn, product_id)
                        .await?
                        .ok_or(OrderServiceError::ProductUnavailable)?;

                    let total_price = order_total(&product.price, quantity)?;

                    // Conditional decrement: a concurrent checkout that drained the
                    // stock after the read above makes this match zero rows.
                    if !product_repo
                        .decrement_stock(conn, product_id, quantity)
                        .await?
                    {
                        return Err(OrderServiceError::ProductUnavailable);
                    }

                    let new_order = NewOrder {
                        user_id,
                        product_id,
                        quantity,
                        total_price,
                        status: OrderStatus::Pending.as_str().to_string(),
                    };

                    Ok(OrderRepo::new().add(conn, new_order).await?)
                }
                .scope_boxed()
            })
            .await?;

        tracing::info!(order_id, user_id, product_id, quantity, "Order placed");

        Ok(order_id)
    }

    /// Orders still waiting to be prepared.
    pub async fn get_pending_orders(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Vec<Order>, OrderServiceError> {
        let orders = OrderRepo::new()
            .get_by_status(conn, OrderStatus::Pending.as_str())
            .await?;

        Ok(orders.unwrap_or_default())
    }

    /// Sets a free-text status chosen by a seller.
    pub async fn update_order_status(
        &self,
        conn: &mut AsyncMysqlConnection,
        order_id: i32,
        new_status: &str,
    ) -> Result<(), OrderServiceError> {
        let new_status = new_status.trim();
        if new_status.is_empty() || new_status.chars().count() > MAX_STATUS_LEN {
            return Err(OrderServiceError::InvalidStatus(new_status.to_string()));
        }

        self.set_status(conn, order_id, new_status).await
    }

    /// Marks an order as prepared by the warehouse.
    pub async fn prepare_order(
        &self,
        conn: &mut AsyncMysqlConnection,
        order_id: i32,
    ) -> Result<(), OrderServiceError> {
        self.set_status(conn, order_id, OrderStatus::Prepared.as_str())
            .await
    }

    async fn set_status(
        &self,
        conn: &mut AsyncMysqlConnection,
        order_id: i32,
        status: &str,
    ) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();

        repo.get_by_id(conn, order_id)
            .await?
            .ok_or(OrderServiceError::OrderNotFound)?;

        repo.update(conn, order_id, UpdateOrder { status }).await?;

        tracing::info!(order_id, status, "Order status updated");

        Ok(())
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}

fn order_total(price: &BigDecimal, quantity: i32) -> Result<BigDecimal, OrderServiceError> {
    let total = price * BigDecimal::from(quantity);
    if total >= BigDecimal::from(TOTAL_PRICE_LIMIT) {
        return Err(OrderServiceError::TotalOutOfRange(total));
    }
    Ok(total)
}
