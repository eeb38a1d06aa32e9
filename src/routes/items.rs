use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use super::auth::CreatedResponse;
use crate::{
    auth::CurrentUser,
    db::{
        dao::{NewTodoItem, TodoItemPatch},
        entities::todo_item,
    },
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, TodoItemService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl From<UpdateItemRequest> for TodoItemPatch {
    fn from(body: UpdateItemRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            done: body.done,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists/{id}/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
    Json(body): Json<CreateItemRequest>,
) -> ApiResult<CreatedResponse> {
    let id = service(&state)
        .create(
            user_id,
            list_id,
            NewTodoItem {
                title: body.title,
                description: body.description,
            },
        )
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", CreatedResponse { id })
}

async fn list_items(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(list_id): Path<i32>,
) -> ApiResult<Vec<todo_item::Model>> {
    JsonApiResponse::ok(service(&state).get_all(user_id, list_id).await?)
}

async fn get_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<todo_item::Model> {
    JsonApiResponse::ok(service(&state).get_by_id(user_id, id).await?)
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateItemRequest>,
) -> ApiResult<()> {
    service(&state).update(user_id, id, body.into()).await?;
    JsonApiResponse::ok(())
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    service(&state).delete(user_id, id).await?;
    JsonApiResponse::ok(())
}

fn service(state: &AppState) -> TodoItemService {
    ServiceContext::from_state(state).todo_item()
}
