use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    db::dao::DaoContext,
    services::{AuthService, TodoItemService, TodoListService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    jwt: JwtKeys,
    access_token_ttl_secs: usize,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection, jwt: &JwtKeys, access_token_ttl_secs: usize) -> Self {
        Self {
            daos: DaoContext::new(db),
            jwt: jwt.clone(),
            access_token_ttl_secs,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db, &state.jwt, state.access_token_ttl_secs())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(
            self.daos.user(),
            self.jwt.clone(),
            self.access_token_ttl_secs,
        )
    }

    pub fn todo_list(&self) -> TodoListService {
        TodoListService::new(self.daos.todo_list())
    }

    pub fn todo_item(&self) -> TodoItemService {
        TodoItemService::new(self.daos.todo_list(), self.daos.todo_item())
    }
}
