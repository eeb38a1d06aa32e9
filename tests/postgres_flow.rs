use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::json;
use tower::ServiceExt;

use todo_api::{
    config::AppConfig,
    db::{
        connection,
        dao::{
            DaoBase, DaoLayerError, NewTodoItem, NewTodoList, TodoItemDao, TodoListDao, UserDao,
        },
        entities::prelude::{ListsItems, TodoItem},
    },
    routes::router,
    test_helpers::test_state,
};

async fn database() -> DatabaseConnection {
    let cfg = AppConfig::from_env().expect("load app config");
    let db_cfg = cfg.database.expect("APP_DATABASE__URL must be set");
    connection::connect(&db_cfg).await.expect("connect to database")
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

async fn call(
    db: &DatabaseConnection,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = router(test_state(db.clone()))
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

async fn sign_up_and_in(db: &DatabaseConnection) -> String {
    let username = unique("user");
    let (status, _) = call(
        db,
        "POST",
        "/auth/sign-up",
        None,
        Some(json!({ "name": "Test", "username": username, "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        db,
        "POST",
        "/auth/sign-in",
        None,
        Some(json!({ "username": username, "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"]
        .as_str()
        .expect("token in response")
        .to_string()
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn item_flow_is_scoped_to_owner() {
    let db = database().await;
    let owner = sign_up_and_in(&db).await;
    let stranger = sign_up_and_in(&db).await;

    let (status, list) = call(
        &db,
        "POST",
        "/api/lists",
        Some(&owner),
        Some(json!({ "title": "groceries" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let list_id = list["data"]["id"].as_i64().expect("list id");

    let (status, created) = call(
        &db,
        "POST",
        &format!("/api/lists/{list_id}/items"),
        Some(&owner),
        Some(json!({ "title": "title", "description": "description" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = created["data"]["id"].as_i64().expect("item id");
    let item_path = format!("/api/items/{item_id}");

    let (status, item) = call(&db, "GET", &item_path, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        item["data"],
        json!({ "id": item_id, "title": "title", "description": "description", "done": false })
    );

    let (status, _) = call(&db, "GET", &item_path, Some(&stranger), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(
        &db,
        "POST",
        &format!("/api/lists/{list_id}/items"),
        Some(&stranger),
        Some(json!({ "title": "intruder" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &db,
        "PUT",
        &item_path,
        Some(&owner),
        Some(json!({ "done": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, item) = call(&db, "GET", &item_path, Some(&owner), None).await;
    assert_eq!(item["data"]["done"], json!(true));
    assert_eq!(item["data"]["title"], json!("title"));

    let (status, _) = call(&db, "DELETE", &item_path, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&db, "DELETE", &item_path, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&db, "GET", &item_path, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn failed_link_insert_leaves_no_item_behind() {
    let db = database().await;
    let items_before = TodoItem::find().count(&db).await.expect("count items");
    let links_before = ListsItems::find().count(&db).await.expect("count links");

    let err = TodoItemDao::new(&db)
        .create(
            i32::MAX,
            NewTodoItem {
                title: "orphan".to_string(),
                description: String::new(),
            },
        )
        .await;
    assert!(err.is_err(), "link to a missing list must fail");

    assert_eq!(TodoItem::find().count(&db).await.expect("count items"), items_before);
    assert_eq!(ListsItems::find().count(&db).await.expect("count links"), links_before);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn store_rejects_empty_titles() {
    let db = database().await;
    let user_id = UserDao::new(&db)
        .create_user("Check", &unique("check"), "hash")
        .await
        .expect("user insert");
    let list_id = TodoListDao::new(&db)
        .create(
            user_id,
            NewTodoList {
                title: "owned".to_string(),
                description: String::new(),
            },
        )
        .await
        .expect("list insert");

    let items_before = TodoItem::find().count(&db).await.expect("count items");
    let links_before = ListsItems::find().count(&db).await.expect("count links");

    let err = TodoItemDao::new(&db)
        .create(
            list_id,
            NewTodoItem {
                title: String::new(),
                description: String::new(),
            },
        )
        .await
        .expect_err("empty title must be rejected by the store");
    match err {
        DaoLayerError::Db(db_err) => assert!(
            db_err.to_string().contains("todo_items_title_not_empty"),
            "expected the title check to fire, got: {db_err}"
        ),
        other => panic!("expected a database error, got: {other}"),
    }

    assert_eq!(TodoItem::find().count(&db).await.expect("count items"), items_before);
    assert_eq!(ListsItems::find().count(&db).await.expect("count links"), links_before);

    let err = TodoListDao::new(&db)
        .create(
            user_id,
            NewTodoList {
                title: String::new(),
                description: String::new(),
            },
        )
        .await
        .expect_err("empty list title must be rejected by the store");
    assert!(
        err.to_string().contains("todo_lists_title_not_empty"),
        "expected the list title check to fire, got: {err}"
    );
}
