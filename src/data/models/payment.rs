use crate::data::models::order::Order;
use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = payments)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub payment_type: String,
    pub confirmed: bool,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = payments)]
pub struct NewPayment<'a> {
    pub order_id: i32,
    pub payment_type: &'a str,
    pub confirmed: bool,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = payments)]
pub struct UpdatePayment {
    pub confirmed: bool,
}
