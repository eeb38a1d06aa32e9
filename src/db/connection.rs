use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;

/// Title checks the entity format cannot express; re-applied after every sync.
const CONSTRAINTS: &[(&str, &str)] = &[
    ("todo_items", "todo_items_title_not_empty"),
    ("todo_lists", "todo_lists_title_not_empty"),
];

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("syncing database schema from entities");
    db.get_schema_registry("todo_api::db::entities::*")
        .sync(&db)
        .await?;
    ensure_constraints(&db).await?;
    Ok(db)
}

pub async fn ensure_constraints<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for (table, name) in CONSTRAINTS {
        db.execute_unprepared(&format!(
            "ALTER TABLE {table} DROP CONSTRAINT IF EXISTS {name}"
        ))
        .await?;
        db.execute_unprepared(&format!(
            "ALTER TABLE {table} ADD CONSTRAINT {name} CHECK (title <> '')"
        ))
        .await?;
    }
    Ok(())
}
