use crate::data::models::category::NewCategory;
use crate::data::models::product::{NewProduct, Product};
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::{CatalogServiceError, is_unique_violation};
use bigdecimal::{BigDecimal, Signed};
use diesel_async::AsyncMysqlConnection;

const MAX_CATEGORY_NAME_LEN: usize = 50;
const MAX_CODE_LEN: usize = 20;
const MAX_BRAND_LEN: usize = 50;
const MAX_PRODUCT_NAME_LEN: usize = 100;
/// `DECIMAL(10, 2)`: eight integer digits, two fractional.
const PRICE_LIMIT: u64 = 100_000_000;
const PRICE_SCALE: i64 = 2;

/// Fields of a product as submitted by an administrator.
pub struct ProductDraft<'a> {
    pub code: &'a str,
    pub brand: &'a str,
    pub name: &'a str,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}

pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        CatalogService
    }

    /// All products with the name of their category.
    pub async fn get_catalog(
        &self,
        conn: &mut AsyncMysqlConnection,
    ) -> Result<Vec<(Product, String)>, CatalogServiceError> {
        Ok(ProductRepo::new().get_all_with_category(conn).await?)
    }

    pub async fn add_category(
        &self,
        conn: &mut AsyncMysqlConnection,
        name: &str,
    ) -> Result<i32, CatalogServiceError> {
        let name = text_field("nombre", name, MAX_CATEGORY_NAME_LEN)?;

        let category_id = CategoryRepo::new()
            .add(conn, NewCategory { name })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    CatalogServiceError::CategoryAlreadyExists
                } else {
                    CatalogServiceError::Database(e)
                }
            })?;

        tracing::info!(category_id, name, "Category created");

        Ok(category_id)
    }

    pub async fn add_product(
        &self,
        conn: &mut AsyncMysqlConnection,
        draft: ProductDraft<'_>,
    ) -> Result<i32, CatalogServiceError> {
        let code = text_field("codigo", draft.code, MAX_CODE_LEN)?;
        let brand = text_field("marca", draft.brand, MAX_BRAND_LEN)?;
        let name = text_field("nombre", draft.name, MAX_PRODUCT_NAME_LEN)?;

        check_price(&draft.price)?;
        if draft.stock < 0 {
            return Err(CatalogServiceError::InvalidField("stock"));
        }

        CategoryRepo::new()
            .get_by_id(conn, draft.category_id)
            .await?
            .ok_or(CatalogServiceError::CategoryNotFound)?;

        let new_product = NewProduct {
            code,
            brand,
            name,
            price: draft.price,
            stock: draft.stock,
            category_id: draft.category_id,
        };

        let product_id = ProductRepo::new()
            .add(conn, new_product)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    CatalogServiceError::ProductAlreadyExists
                } else {
                    CatalogServiceError::Database(e)
                }
            })?;

        tracing::info!(product_id, code, category_id = draft.category_id, "Product created");

        Ok(product_id)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

/// The price must be stored exactly as submitted.
fn check_price(price: &BigDecimal) -> Result<(), CatalogServiceError> {
    if price.is_negative()
        || *price >= BigDecimal::from(PRICE_LIMIT)
        || price.normalized().fractional_digit_count() > PRICE_SCALE
    {
        return Err(CatalogServiceError::InvalidField("precio"));
    }
    Ok(())
}

fn text_field<'a>(
    name: &'static str,
    value: &'a str,
    max_len: usize,
) -> Result<&'a str, CatalogServiceError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > max_len {
        return Err(CatalogServiceError::InvalidField(name));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    #[test]
    fn price_must_fit_the_column() {
        for ok in ["0", "12.5", "12.50", "1.990", "99999999.99"] {
            assert!(check_price(&price(ok)).is_ok(), "{ok} should be accepted");
        }
        for bad in ["-0.01", "100000000", "100000000.00", "1.999", "0.001"] {
            let result = check_price(&price(bad));
            assert!(
                matches!(result, Err(CatalogServiceError::InvalidField("precio"))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn text_field_trims_and_bounds_length() {
        assert_eq!(text_field("marca", "  Acme ", 10).unwrap(), "Acme");
        assert!(matches!(
            text_field("marca", "   ", 10),
            Err(CatalogServiceError::InvalidField("marca"))
        ));
        assert!(matches!(
            text_field("codigo", "ABCDEFGHIJK", 10),
            Err(CatalogServiceError::InvalidField("codigo"))
        ));
    }
}
