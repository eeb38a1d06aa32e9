use crate::{
    db::{
        dao::{NewTodoList, TodoListDao, TodoListPatch},
        entities::todo_list,
    },
    error::AppError,
    services::crud_errors::{CrudErrors, CrudOp, require_title},
};

const LIST_ERRORS: CrudErrors = CrudErrors {
    create_failed: "Todo list create failed",
    find_failed: "Todo list lookup failed",
    not_found: "Todo list not found",
    update_failed: "Todo list update failed",
    delete_failed: "Todo list delete failed",
};

#[derive(Clone)]
pub struct TodoListService {
    dao: TodoListDao,
}

impl TodoListService {
    pub fn new(dao: TodoListDao) -> Self {
        Self { dao }
    }

    pub async fn create(&self, user_id: i32, list: NewTodoList) -> Result<i32, AppError> {
        let list = NewTodoList {
            title: require_title(&list.title)?,
            description: list.description,
        };
        self.dao
            .create(user_id, list)
            .await
            .map_err(|err| LIST_ERRORS.map(CrudOp::Create, err))
    }

    pub async fn get_all(&self, user_id: i32) -> Result<Vec<todo_list::Model>, AppError> {
        self.dao
            .get_all(user_id)
            .await
            .map_err(|err| LIST_ERRORS.map(CrudOp::List, err))
    }

    pub async fn get_by_id(&self, user_id: i32, list_id: i32) -> Result<todo_list::Model, AppError> {
        self.dao
            .get_by_id(user_id, list_id)
            .await
            .map_err(|err| LIST_ERRORS.map(CrudOp::Find, err))
    }

    pub async fn update(
        &self,
        user_id: i32,
        list_id: i32,
        mut patch: TodoListPatch,
    ) -> Result<(), AppError> {
        if let Some(title) = patch.title.as_deref() {
            patch.title = Some(require_title(title)?);
        }
        self.dao
            .update(user_id, list_id, patch)
            .await
            .map_err(|err| LIST_ERRORS.map(CrudOp::Update, err))
    }

    pub async fn delete(&self, user_id: i32, list_id: i32) -> Result<(), AppError> {
        self.dao
            .delete(user_id, list_id)
            .await
            .map_err(|err| LIST_ERRORS.map(CrudOp::Delete, err))
    }
}
