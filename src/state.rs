use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::jwt::JwtKeys, config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection, jwt: JwtKeys) -> Arc<Self> {
        Arc::new(Self { config, db, jwt })
    }

    pub fn access_token_ttl_secs(&self) -> usize {
        self.config
            .auth
            .as_ref()
            .map(|auth| auth.access_token_ttl_secs.max(0) as usize)
            .unwrap_or(crate::config::defaults::DEFAULT_ACCESS_TOKEN_TTL_SECS as usize)
    }
}
