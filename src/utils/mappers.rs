use crate::data::models::roles::Role;
use diesel::deserialize::FromSql;
use diesel::mysql::{Mysql, MysqlValue};
use diesel::serialize::{Output, ToSql};
use diesel::sql_types::Varchar;
use diesel::{deserialize, serialize};
use std::io::Write;
use std::str::FromStr;

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "vendedor" => Ok(Role::Vendedor),
            "bodeguero" => Ok(Role::Bodeguero),
            "contador" => Ok(Role::Contador),
            "cliente" => Ok(Role::Cliente),
            _ => Err("Unknown role"),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ToSql<Varchar, Mysql> for Role {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Mysql>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Varchar, Mysql> for Role {
    fn from_sql(bytes: MysqlValue<'_>) -> deserialize::Result<Self> {
        let raw = std::str::from_utf8(bytes.as_bytes())?;
        raw.parse()
            .map_err(|e: &'static str| format!("{e}: {raw}").into())
    }
}
