use std::sync::Arc;

use axum::{Router, middleware::from_fn, middleware::from_fn_with_state};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware, jwt_auth},
    state::AppState,
};

pub mod auth;
pub mod items;
pub mod lists;
pub mod public;

pub const API_PREFIX: &str = "/api";
pub const AUTH_PREFIX: &str = "/auth";

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(lists::router(state.clone()))
        .merge(items::router(state.clone()))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth));

    Router::new()
        .merge(public::router())
        .nest(AUTH_PREFIX, auth::router(state))
        .nest(API_PREFIX, api)
        .layer(from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
