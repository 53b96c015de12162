use crate::api::config::Config;
use crate::data::database::Database;
use crate::security::jwt::JwtService;

/// Shared by every handler. Cloned per request; the clones share the pool.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(config: &Config, db: Database) -> Self {
        AppState {
            db,
            jwt: JwtService::new(config),
        }
    }
}
