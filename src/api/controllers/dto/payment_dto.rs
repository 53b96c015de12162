use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct CreatePaymentRequest {
    #[serde(rename = "id_pedido")]
    pub order_id: i32,
    #[serde(rename = "tipo_pago")]
    pub payment_type: String,
}
