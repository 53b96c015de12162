use crate::data::models::payment::{NewPayment, UpdatePayment};
use crate::data::repos::implementors::payment_repo::PaymentRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::{PaymentServiceError, is_foreign_key_violation};
use diesel_async::AsyncMysqlConnection;

const MAX_PAYMENT_TYPE_LEN: usize = 20;

pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        PaymentService
    }

    /// Records an unconfirmed payment against an order.
    pub async fn register_payment(
        &self,
        conn: &mut AsyncMysqlConnection,
        order_id: i32,
        payment_type: &str,
    ) -> Result<i32, PaymentServiceError> {
        let payment_type = payment_type.trim();
        if payment_type.is_empty() || payment_type.chars().count() > MAX_PAYMENT_TYPE_LEN {
            return Err(PaymentServiceError::InvalidPaymentType(
                payment_type.to_string(),
            ));
        }

        let new_payment = NewPayment {
            order_id,
            payment_type,
            confirmed: false,
        };

        // No lookup of the order beforehand; the foreign key rejects unknown ids.
        let payment_id = PaymentRepo::new()
            .add(conn, new_payment)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    PaymentServiceError::OrderNotFound
                } else {
                    PaymentServiceError::Database(e)
                }
            })?;

        tracing::info!(payment_id, order_id, payment_type, "Payment registered");

        Ok(payment_id)
    }

    /// Marks a payment as confirmed. Confirming twice is a no-op.
    pub async fn confirm_payment(
        &self,
        conn: &mut AsyncMysqlConnection,
        payment_id: i32,
    ) -> Result<(), PaymentServiceError> {
        let repo = PaymentRepo::new();

        let payment = repo
            .get_by_id(conn, payment_id)
            .await?
            .ok_or(PaymentServiceError::PaymentNotFound)?;

        if payment.confirmed {
            tracing::debug!(payment_id, "Payment already confirmed");
            return Ok(());
        }

        repo.update(conn, payment_id, UpdatePayment { confirmed: true })
            .await?;

        tracing::info!(payment_id, "Payment confirmed");

        Ok(())
    }
}

impl Default for PaymentService {
    fn default() -> Self {
        Self::new()
    }
}
