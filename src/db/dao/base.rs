use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Statement, Value,
};

use super::error::{DaoLayerError, DaoResult};

/// Primary key echoed back by `... RETURNING id` statements.
#[derive(Debug, FromQueryResult)]
pub struct ReturnedId {
    pub id: i32,
}

pub fn raw_statement<I>(sql: &str, values: I) -> Statement
where
    I: IntoIterator<Item = Value>,
{
    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

#[allow(async_fn_in_trait)]
pub trait DaoBase: Clone + Send + Sync + Sized {
    type Entity: EntityTrait + Send + Sync;
    const ENTITY_NAME: &'static str;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    fn not_found(id: i32) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        }
    }

    async fn fetch_all(
        &self,
        statement: Statement,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        Ok(Self::Entity::find()
            .from_raw_sql(statement)
            .all(self.db())
            .await?)
    }

    async fn fetch_one(
        &self,
        statement: Statement,
        id: i32,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        Self::Entity::find()
            .from_raw_sql(statement)
            .one(self.db())
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Runs a `RETURNING id` write and fails with `NotFound` when it touched
    /// no row.
    async fn write_one<C>(&self, conn: &C, statement: Statement, id: i32) -> DaoResult<()>
    where
        C: ConnectionTrait,
    {
        let touched = ReturnedId::find_by_statement(statement).all(conn).await?;
        if touched.is_empty() {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
