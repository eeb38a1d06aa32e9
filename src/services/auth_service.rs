use sea_orm::SqlErr;

use crate::{
    auth::{
        jwt::{JwtKeys, decode_token, encode_token, make_access_claims},
        password::{hash_password, verify_password},
    },
    db::dao::{DaoLayerError, UserDao},
    error::AppError,
};

#[derive(Clone)]
pub struct AuthService {
    user_dao: UserDao,
    jwt: JwtKeys,
    access_token_ttl_secs: usize,
}

impl AuthService {
    pub fn new(user_dao: UserDao, jwt: JwtKeys, access_token_ttl_secs: usize) -> Self {
        Self {
            user_dao,
            jwt,
            access_token_ttl_secs,
        }
    }

    pub async fn sign_up(&self, name: &str, username: &str, password: &str) -> Result<i32, AppError> {
        let name = name.trim();
        let username = username.trim();
        if name.is_empty() || username.is_empty() {
            return Err(AppError::bad_request("Name and username required"));
        }

        if self
            .user_dao
            .find_by_username(username)
            .await
            .map_err(map_lookup_error)?
            .is_some()
        {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = hash_password(password)?;
        let id = self
            .user_dao
            .create_user(name, username, &password_hash)
            .await
            .map_err(|err| match err {
                DaoLayerError::Db(db_err)
                    if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    AppError::conflict("User already exists")
                }
                err => {
                    tracing::error!(error = %err, "create user failed");
                    AppError::internal("Create user failed")
                }
            })?;

        tracing::info!(user_id = id, "user signed up");
        Ok(id)
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_dao
            .find_by_username(username.trim())
            .await
            .map_err(map_lookup_error)?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let claims = make_access_claims(user.id, self.access_token_ttl_secs);
        encode_token(&self.jwt, &claims)
    }

    pub fn parse_token(&self, token: &str) -> Result<i32, AppError> {
        decode_token(&self.jwt, token)?.user_id()
    }
}

fn map_lookup_error(err: DaoLayerError) -> AppError {
    tracing::error!(error = %err, "user lookup failed");
    AppError::internal("DB error")
}
