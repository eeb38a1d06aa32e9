use sea_orm::{ActiveModelTrait, DatabaseConnection, FromQueryResult, Set, TransactionTrait};

use super::base::{DaoBase, ReturnedId, raw_statement};
use super::error::DaoResult;
use super::patch::Patch;
use crate::db::entities::prelude::TodoList;
use crate::db::entities::{todo_list, users_lists};

pub(crate) const SELECT_USER_LISTS: &str = "SELECT tl.id, tl.title, tl.description \
     FROM todo_lists tl \
     INNER JOIN users_lists ul ON ul.list_id = tl.id \
     WHERE ul.user_id = $1";

pub(crate) const SELECT_LIST: &str = "SELECT tl.id, tl.title, tl.description \
     FROM todo_lists tl \
     INNER JOIN users_lists ul ON ul.list_id = tl.id \
     WHERE tl.id = $1 AND ul.user_id = $2";

pub(crate) const DELETE_LIST_ITEMS: &str = "DELETE FROM todo_items ti \
     USING lists_items li, users_lists ul \
     WHERE ti.id = li.item_id AND li.list_id = ul.list_id \
     AND li.list_id = $1 AND ul.user_id = $2 \
     RETURNING ti.id";

pub(crate) const DELETE_LIST: &str = "DELETE FROM todo_lists tl \
     USING users_lists ul \
     WHERE tl.id = ul.list_id \
     AND tl.id = $1 AND ul.user_id = $2 \
     RETURNING tl.id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoList {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TodoListPatch {
    fn into_patch(self) -> Patch {
        Patch::new()
            .set("title", self.title)
            .set("description", self.description)
    }
}

#[derive(Clone)]
pub struct TodoListDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoListDao {
    type Entity = TodoList;
    const ENTITY_NAME: &'static str = "todo list";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoListDao {
    pub async fn create(&self, user_id: i32, list: NewTodoList) -> DaoResult<i32> {
        let txn = self.db.begin().await?;

        let created = todo_list::ActiveModel {
            title: Set(list.title),
            description: Set(list.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        users_lists::ActiveModel {
            user_id: Set(user_id),
            list_id: Set(created.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created.id)
    }

    pub async fn get_all(&self, user_id: i32) -> DaoResult<Vec<todo_list::Model>> {
        self.fetch_all(raw_statement(SELECT_USER_LISTS, [user_id.into()]))
            .await
    }

    pub async fn get_by_id(&self, user_id: i32, list_id: i32) -> DaoResult<todo_list::Model> {
        self.fetch_one(
            raw_statement(SELECT_LIST, [list_id.into(), user_id.into()]),
            list_id,
        )
        .await
    }

    pub async fn update(&self, user_id: i32, list_id: i32, patch: TodoListPatch) -> DaoResult<()> {
        let statement = patch.into_patch().into_statement("todo_lists tl", |b| {
            format!(
                "FROM users_lists ul \
                 WHERE tl.id = ul.list_id \
                 AND tl.id = {} AND ul.user_id = {} \
                 RETURNING tl.id",
                b.bind(list_id),
                b.bind(user_id)
            )
        })?;
        self.write_one(&self.db, statement, list_id).await
    }

    /// Deletes the list together with the items it contains.
    ///
    /// Both deletes are scoped by ownership and share a transaction; when the
    /// list does not resolve for `user_id` nothing is removed.
    pub async fn delete(&self, user_id: i32, list_id: i32) -> DaoResult<()> {
        let txn = self.db.begin().await?;

        ReturnedId::find_by_statement(raw_statement(
            DELETE_LIST_ITEMS,
            [list_id.into(), user_id.into()],
        ))
        .all(&txn)
        .await?;

        self.write_one(
            &txn,
            raw_statement(DELETE_LIST, [list_id.into(), user_id.into()]),
            list_id,
        )
        .await?;

        txn.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};

    use super::{DELETE_LIST, DELETE_LIST_ITEMS, SELECT_USER_LISTS, TodoListDao, TodoListPatch};
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::todo_list;

    fn list(id: i32, title: &str) -> todo_list::Model {
        todo_list::Model {
            id,
            title: title.to_string(),
            description: String::new(),
        }
    }

    fn id_row(id: i32) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("id", Value::from(id))])
    }

    #[tokio::test]
    async fn get_all_is_scoped_by_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![list(1, "home"), list(4, "work")]])
            .into_connection();
        let dao = TodoListDao::new(&db);

        let lists = dao.get_all(9).await.expect("get_all should succeed");
        assert_eq!(lists, vec![list(1, "home"), list(4, "work")]);
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                SELECT_USER_LISTS,
                [Value::from(9)],
            )]
        );
    }

    #[tokio::test]
    async fn update_title_only_binds_title_list_and_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[id_row(3)]])
            .into_connection();
        let dao = TodoListDao::new(&db);

        dao.update(
            2,
            3,
            TodoListPatch {
                title: Some("renamed".to_string()),
                description: None,
            },
        )
        .await
        .expect("update should succeed");

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                "UPDATE todo_lists tl SET title = $1 FROM users_lists ul \
                 WHERE tl.id = ul.list_id AND tl.id = $2 AND ul.user_id = $3 \
                 RETURNING tl.id",
                [Value::from("renamed"), Value::from(3), Value::from(2)],
            )]
        );
    }

    #[tokio::test]
    async fn update_without_fields_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let dao = TodoListDao::new(&db);

        let err = dao
            .update(1, 1, TodoListPatch::default())
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::EmptyUpdate));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_items_then_list_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![id_row(10), id_row(11)], vec![id_row(5)]])
            .into_connection();
        let dao = TodoListDao::new(&db);

        dao.delete(1, 5).await.expect("delete should succeed");

        let log = db.into_transaction_log();
        let sql: Vec<&str> = log
            .iter()
            .flat_map(|txn| txn.statements())
            .map(|stmt| stmt.sql.as_str())
            .collect();
        assert_eq!(sql, vec!["BEGIN", DELETE_LIST_ITEMS, DELETE_LIST, "COMMIT"]);
    }

    #[tokio::test]
    async fn delete_of_unowned_list_is_not_found_and_not_committed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new(), Vec::new()])
            .into_connection();
        let dao = TodoListDao::new(&db);

        let err = dao.delete(1, 5).await.expect_err("delete should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "todo list", id: 5 }
        ));

        let log = db.into_transaction_log();
        assert!(
            !log.iter()
                .flat_map(|txn| txn.statements())
                .any(|stmt| stmt.sql == "COMMIT")
        );
    }
}
