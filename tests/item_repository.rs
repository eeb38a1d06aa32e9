use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, Value};

use todo_api::db::{
    dao::{DaoBase, DaoLayerError, NewTodoItem, TodoItemDao, TodoItemPatch},
    entities::{lists_items, todo_item},
};

fn item(id: i32, done: bool) -> todo_item::Model {
    todo_item::Model {
        id,
        title: "title".to_string(),
        description: "description".to_string(),
        done,
    }
}

fn id_row(id: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("id", Value::from(id))])
}

#[tokio::test]
async fn item_lifecycle_against_mock_store() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[item(1, false)]])
        .append_query_results([[lists_items::Model {
            id: 1,
            list_id: 1,
            item_id: 1,
        }]])
        .append_query_results([[item(1, false)]])
        .append_query_results([[id_row(1)]])
        .append_query_results([[item(1, true)]])
        .append_query_results([[id_row(1)]])
        .append_query_results([Vec::<todo_item::Model>::new()])
        .into_connection();
    let dao = TodoItemDao::new(&db);

    let id = dao
        .create(
            1,
            NewTodoItem {
                title: "title".to_string(),
                description: "description".to_string(),
            },
        )
        .await
        .expect("create should succeed");
    assert_eq!(id, 1);

    let fetched = dao.get_by_id(1, id).await.expect("item should exist");
    assert_eq!(fetched, item(1, false));

    dao.update(
        1,
        id,
        TodoItemPatch {
            done: Some(true),
            ..TodoItemPatch::default()
        },
    )
    .await
    .expect("update should succeed");

    let fetched = dao.get_by_id(1, id).await.expect("item should exist");
    assert!(fetched.done);
    assert_eq!(fetched.title, "title");

    dao.delete(1, id).await.expect("delete should succeed");

    let err = dao.get_by_id(1, id).await.expect_err("item should be gone");
    assert!(matches!(
        err,
        DaoLayerError::NotFound {
            entity: "todo item",
            id: 1
        }
    ));

    let log = db.into_transaction_log();
    let done_update = log
        .iter()
        .flat_map(|txn| txn.statements())
        .find(|stmt| stmt.sql.starts_with("UPDATE"))
        .expect("update statement should be logged");
    assert!(done_update.sql.contains("SET done = $1"));
    assert_eq!(
        done_update.values.as_ref().map(|v| v.0.clone()),
        Some(vec![Value::from(true), Value::from(1), Value::from(1)])
    );
}

#[tokio::test]
async fn other_users_see_nothing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<todo_item::Model>::new()])
        .append_query_results([Vec::<todo_item::Model>::new()])
        .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
        .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
        .into_connection();
    let dao = TodoItemDao::new(&db);

    assert!(dao.get_all(2, 1).await.expect("query should run").is_empty());
    assert!(matches!(
        dao.get_by_id(2, 1).await,
        Err(DaoLayerError::NotFound { .. })
    ));
    assert!(matches!(
        dao.update(
            2,
            1,
            TodoItemPatch {
                title: Some("stolen".to_string()),
                ..TodoItemPatch::default()
            }
        )
        .await,
        Err(DaoLayerError::NotFound { .. })
    ));
    assert!(matches!(
        dao.delete(2, 1).await,
        Err(DaoLayerError::NotFound { .. })
    ));

    for stmt in db
        .into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements())
    {
        let values = stmt.values.as_ref().map(|v| v.0.clone()).unwrap_or_default();
        assert!(
            values.contains(&Value::from(2)),
            "statement not scoped to caller: {}",
            stmt.sql
        );
    }
}
