//! Ownership-scoped access to todo items.
//!
//! Every read and write joins `lists_items` and `users_lists` in the same
//! statement, so an item id only resolves when the caller owns a list that
//! contains it. Missing and foreign items both come back as
//! [`NotFound`](super::DaoLayerError::NotFound).

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

use super::base::{DaoBase, raw_statement};
use super::error::DaoResult;
use super::patch::Patch;
use crate::db::entities::prelude::TodoItem;
use crate::db::entities::{lists_items, todo_item};

pub(crate) const SELECT_LIST_ITEMS: &str = "SELECT ti.id, ti.title, ti.description, ti.done \
     FROM todo_items ti \
     INNER JOIN lists_items li ON li.item_id = ti.id \
     INNER JOIN users_lists ul ON ul.list_id = li.list_id \
     WHERE li.list_id = $1 AND ul.user_id = $2";

pub(crate) const SELECT_ITEM: &str = "SELECT ti.id, ti.title, ti.description, ti.done \
     FROM todo_items ti \
     INNER JOIN lists_items li ON li.item_id = ti.id \
     INNER JOIN users_lists ul ON ul.list_id = li.list_id \
     WHERE ti.id = $1 AND ul.user_id = $2";

pub(crate) const DELETE_ITEM: &str = "DELETE FROM todo_items ti \
     USING lists_items li, users_lists ul \
     WHERE ti.id = li.item_id AND li.list_id = ul.list_id \
     AND ti.id = $1 AND ul.user_id = $2 \
     RETURNING ti.id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
}

/// Sparse update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl TodoItemPatch {
    fn into_patch(self) -> Patch {
        Patch::new()
            .set("title", self.title)
            .set("description", self.description)
            .set("done", self.done)
    }
}

#[derive(Clone)]
pub struct TodoItemDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoItemDao {
    type Entity = TodoItem;
    const ENTITY_NAME: &'static str = "todo item";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoItemDao {
    /// Inserts the item and links it to `list_id` in one transaction.
    ///
    /// The caller is expected to have proven ownership of `list_id`.
    pub async fn create(&self, list_id: i32, item: NewTodoItem) -> DaoResult<i32> {
        let txn = self.db.begin().await?;

        let created = todo_item::ActiveModel {
            title: Set(item.title),
            description: Set(item.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        lists_items::ActiveModel {
            list_id: Set(list_id),
            item_id: Set(created.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created.id)
    }

    pub async fn get_all(&self, user_id: i32, list_id: i32) -> DaoResult<Vec<todo_item::Model>> {
        self.fetch_all(raw_statement(
            SELECT_LIST_ITEMS,
            [list_id.into(), user_id.into()],
        ))
        .await
    }

    pub async fn get_by_id(&self, user_id: i32, item_id: i32) -> DaoResult<todo_item::Model> {
        self.fetch_one(
            raw_statement(SELECT_ITEM, [item_id.into(), user_id.into()]),
            item_id,
        )
        .await
    }

    pub async fn update(&self, user_id: i32, item_id: i32, patch: TodoItemPatch) -> DaoResult<()> {
        let statement = patch.into_patch().into_statement("todo_items ti", |b| {
            format!(
                "FROM lists_items li, users_lists ul \
                 WHERE ti.id = li.item_id AND li.list_id = ul.list_id \
                 AND ti.id = {} AND ul.user_id = {} \
                 RETURNING ti.id",
                b.bind(item_id),
                b.bind(user_id)
            )
        })?;
        self.write_one(&self.db, statement, item_id).await
    }

    pub async fn delete(&self, user_id: i32, item_id: i32) -> DaoResult<()> {
        self.write_one(
            &self.db,
            raw_statement(DELETE_ITEM, [item_id.into(), user_id.into()]),
            item_id,
        )
        .await
    }
}
