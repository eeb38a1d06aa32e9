use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .with_state(state)
}

async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignUpRequest>,
) -> ApiResult<CreatedResponse> {
    let id = ServiceContext::from_state(&state)
        .auth()
        .sign_up(&body.name, &body.username, &body.password)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", CreatedResponse { id })
}

async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignInRequest>,
) -> ApiResult<TokenResponse> {
    let token = ServiceContext::from_state(&state)
        .auth()
        .sign_in(&body.username, &body.password)
        .await?;
    JsonApiResponse::ok(TokenResponse { token })
}
