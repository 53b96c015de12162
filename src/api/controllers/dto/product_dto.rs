use crate::data::models::product::Product;
use crate::services::catalog_service::ProductDraft;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct CreateProductRequest {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: BigDecimal,
    pub stock: i32,
    #[serde(rename = "categoria_id")]
    pub category_id: i32,
}

impl<'a> From<&'a CreateProductRequest> for ProductDraft<'a> {
    fn from(request: &'a CreateProductRequest) -> Self {
        ProductDraft {
            code: &request.code,
            brand: &request.brand,
            name: &request.name,
            price: request.price.clone(),
            stock: request.stock,
            category_id: request.category_id,
        }
    }
}

/// A catalog entry with its category name inlined.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "bigdecimal::serde::json_num")]
    pub price: BigDecimal,
    pub stock: i32,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl From<(Product, String)> for ProductResponse {
    fn from((product, category): (Product, String)) -> Self {
        Self {
            id: product.id,
            code: product.code,
            brand: product.brand,
            name: product.name,
            price: product.price,
            stock: product.stock,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(price: &str) -> Product {
        Product {
            id: 7,
            code: "H-01".to_string(),
            brand: "Stanley".to_string(),
            name: "Martillo".to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            stock: 3,
            category_id: 1,
        }
    }

    #[test]
    fn price_is_a_json_number() {
        let response = ProductResponse::from((product("12.50"), "Herramientas".to_string()));
        let value = serde_json::to_value(&response).unwrap();

        assert!(value["precio"].is_number(), "precio was {}", value["precio"]);
        assert_eq!(value["precio"].to_string(), "12.50");
        assert_eq!(value["categoria"], "Herramientas");
    }

    #[test]
    fn request_price_accepts_numbers_and_strings() {
        let from_number: CreateProductRequest = serde_json::from_str(
            r#"{"codigo":"A","marca":"B","nombre":"C","precio":19.99,"stock":1,"categoria_id":1}"#,
        )
        .unwrap();
        let from_string: CreateProductRequest = serde_json::from_str(
            r#"{"codigo":"A","marca":"B","nombre":"C","precio":"19.99","stock":1,"categoria_id":1}"#,
        )
        .unwrap();

        assert_eq!(from_number.price, BigDecimal::from_str("19.99").unwrap());
        assert_eq!(from_string.price, from_number.price);
    }
}
