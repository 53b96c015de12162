use serde::{Deserialize, Serialize};

/// Plain acknowledgement: `{"mensaje": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub mensaje: String,
}

impl MessageResponse {
    pub fn new(mensaje: impl Into<String>) -> Self {
        MessageResponse {
            mensaje: mensaje.into(),
        }
    }
}

/// Acknowledgement of an insert, carrying the new row id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedResponse {
    pub mensaje: String,
    pub id: i32,
}

impl CreatedResponse {
    pub fn new(mensaje: impl Into<String>, id: i32) -> Self {
        CreatedResponse {
            mensaje: mensaje.into(),
            id,
        }
    }
}
