use crate::data::models::category::Category;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub id: i32,
    pub code: String,
    pub brand: String,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub code: &'a str,
    pub brand: &'a str,
    pub name: &'a str,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}
