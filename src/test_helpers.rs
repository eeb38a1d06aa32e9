use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::{JwtKeys, encode_token, make_access_claims},
    config::{AppConfig, AuthConfig, defaults},
    routes::router,
    state::AppState,
};

pub const TEST_SECRET: &[u8] = b"test-secret";

pub fn test_state(db: DatabaseConnection) -> Arc<AppState> {
    let cfg = AppConfig {
        auth: Some(AuthConfig {
            jwt_secret: String::from_utf8_lossy(TEST_SECRET).into_owned(),
            access_token_ttl_secs: defaults::DEFAULT_ACCESS_TOKEN_TTL_SECS,
        }),
        ..AppConfig::default()
    };
    AppState::new(cfg, db, JwtKeys::from_secret(TEST_SECRET))
}

/// Full router over `db`, usually a `MockDatabase` connection.
pub fn test_router(db: DatabaseConnection) -> Router {
    router(test_state(db))
}

/// `Authorization` header value carrying a valid token for `user_id`.
pub fn bearer_for(user_id: i32) -> String {
    let token = encode_token(
        &JwtKeys::from_secret(TEST_SECRET),
        &make_access_claims(user_id, 600),
    )
    .expect("test token should encode");
    format!("Bearer {token}")
}
