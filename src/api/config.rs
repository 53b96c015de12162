use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_JWT_EXPIRATION_MINUTES: u64 = 15;
/// One year.
const MAX_JWT_EXPIRATION_MINUTES: u64 = 525_600;
const DEFAULT_BIND_ADDRESS: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 3000));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let jwt_expiration_minutes = expiration_minutes(optional(
            "JWT_EXPIRATION_MINUTES",
            DEFAULT_JWT_EXPIRATION_MINUTES,
        )?)?;
        let bind_address = optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?;

        tracing::info!("Config loaded");

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_expiration_minutes,
            bind_address,
        })
    }
}

/// Parsed value of `name`, or `default` when it is unset.
fn optional<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

fn expiration_minutes(minutes: u64) -> Result<u64, ConfigError> {
    if minutes == 0 || minutes > MAX_JWT_EXPIRATION_MINUTES {
        return Err(ConfigError::Invalid {
            name: "JWT_EXPIRATION_MINUTES",
            value: minutes.to_string(),
        });
    }
    Ok(minutes)
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
