use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{auth::jwt::decode_token, error::AppError, state::AppState};

pub async fn jwt_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::unauthorized("Missing/invalid Authorization header").into_response()
        })?;

    let claims = decode_token(&state.jwt, token).map_err(IntoResponse::into_response)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
