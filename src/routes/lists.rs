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
        dao::{NewTodoList, TodoListPatch},
        entities::todo_list,
    },
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, TodoListService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateListRequest> for TodoListPatch {
    fn from(body: UpdateListRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route(
            "/lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .with_state(state)
}

async fn create_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<CreateListRequest>,
) -> ApiResult<CreatedResponse> {
    let id = service(&state)
        .create(
            user_id,
            NewTodoList {
                title: body.title,
                description: body.description,
            },
        )
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", CreatedResponse { id })
}

async fn list_lists(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Vec<todo_list::Model>> {
    JsonApiResponse::ok(service(&state).get_all(user_id).await?)
}

async fn get_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<todo_list::Model> {
    JsonApiResponse::ok(service(&state).get_by_id(user_id, id).await?)
}

async fn update_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateListRequest>,
) -> ApiResult<()> {
    service(&state).update(user_id, id, body.into()).await?;
    JsonApiResponse::ok(())
}

async fn delete_list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    service(&state).delete(user_id, id).await?;
    JsonApiResponse::ok(())
}

fn service(state: &AppState) -> TodoListService {
    ServiceContext::from_state(state).todo_list()
}
