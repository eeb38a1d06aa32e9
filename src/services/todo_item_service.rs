use crate::{
    db::{
        dao::{NewTodoItem, TodoItemDao, TodoItemPatch, TodoListDao},
        entities::todo_item,
    },
    error::AppError,
    services::crud_errors::{CrudErrors, CrudOp, require_title},
};

const ITEM_ERRORS: CrudErrors = CrudErrors {
    create_failed: "Todo item create failed",
    find_failed: "Todo item lookup failed",
    not_found: "Todo item not found",
    update_failed: "Todo item update failed",
    delete_failed: "Todo item delete failed",
};

// Only consulted for the list ownership lookup in `create`.
const LIST_ERRORS: CrudErrors = CrudErrors {
    not_found: "Todo list not found",
    find_failed: "Todo list lookup failed",
    ..CrudErrors::DEFAULT
};

#[derive(Clone)]
pub struct TodoItemService {
    lists: TodoListDao,
    items: TodoItemDao,
}

impl TodoItemService {
    pub fn new(lists: TodoListDao, items: TodoItemDao) -> Self {
        Self { lists, items }
    }

    /// Adds an item to `list_id` once the list is shown to belong to `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        list_id: i32,
        item: NewTodoItem,
    ) -> Result<i32, AppError> {
        let item = NewTodoItem {
            title: require_title(&item.title)?,
            description: item.description,
        };
        self.lists
            .get_by_id(user_id, list_id)
            .await
            .map_err(|err| LIST_ERRORS.map(CrudOp::Find, err))?;

        self.items
            .create(list_id, item)
            .await
            .map_err(|err| ITEM_ERRORS.map(CrudOp::Create, err))
    }

    pub async fn get_all(
        &self,
        user_id: i32,
        list_id: i32,
    ) -> Result<Vec<todo_item::Model>, AppError> {
        self.items
            .get_all(user_id, list_id)
            .await
            .map_err(|err| ITEM_ERRORS.map(CrudOp::List, err))
    }

    pub async fn get_by_id(&self, user_id: i32, item_id: i32) -> Result<todo_item::Model, AppError> {
        self.items
            .get_by_id(user_id, item_id)
            .await
            .map_err(|err| ITEM_ERRORS.map(CrudOp::Find, err))
    }

    pub async fn update(
        &self,
        user_id: i32,
        item_id: i32,
        mut patch: TodoItemPatch,
    ) -> Result<(), AppError> {
        if let Some(title) = patch.title.as_deref() {
            patch.title = Some(require_title(title)?);
        }
        self.items
            .update(user_id, item_id, patch)
            .await
            .map_err(|err| ITEM_ERRORS.map(CrudOp::Update, err))
    }

    pub async fn delete(&self, user_id: i32, item_id: i32) -> Result<(), AppError> {
        self.items
            .delete(user_id, item_id)
            .await
            .map_err(|err| ITEM_ERRORS.map(CrudOp::Delete, err))
    }
}
