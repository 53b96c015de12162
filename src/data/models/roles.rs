use diesel::deserialize::FromSqlRow;
use diesel::expression::AsExpression;
use diesel::sql_types::Varchar;
use serde::{Deserialize, Serialize};

/// The fixed set of roles a user can hold. Stored as its lowercase name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Varchar)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendedor,
    Bodeguero,
    Contador,
    Cliente,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Vendedor,
        Role::Bodeguero,
        Role::Contador,
        Role::Cliente,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Vendedor => "vendedor",
            Role::Bodeguero => "bodeguero",
            Role::Contador => "contador",
            Role::Cliente => "cliente",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
