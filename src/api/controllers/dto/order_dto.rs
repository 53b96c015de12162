use crate::data::models::order::Order;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct CheckoutRequest {
    #[serde(rename = "id_producto")]
    pub product_id: i32,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusRequest {
    #[serde(rename = "estado")]
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: i32,
    #[serde(rename = "id_producto")]
    pub product_id: i32,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "precio_total", with = "bigdecimal::serde::json_num")]
    pub total_price: BigDecimal,
    #[serde(rename = "estado")]
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            product_id: order.product_id,
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn total_price_is_a_json_number() {
        let order = Order {
            id: 1,
            user_id: 2,
            product_id: 3,
            quantity: 3,
            total_price: BigDecimal::from_str("37.50").unwrap(),
            status: "pendiente".to_string(),
        };

        let value = serde_json::to_value(OrderResponse::from(order)).unwrap();

        assert!(value["precio_total"].is_number());
        assert_eq!(value["precio_total"].to_string(), "37.50");
        assert_eq!(value["estado"], "pendiente");
    }
}
