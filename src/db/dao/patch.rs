//! Sparse `UPDATE ... SET` builder.
//!
//! Only fields that are present produce an assignment. Placeholders are
//! numbered `$1..$n` in push order, and whatever the statement tail binds
//! afterwards continues from `$n+1`, so the bind list always lines up with the
//! SQL text.

use sea_orm::{DbBackend, Statement, Value};

use super::error::{DaoLayerError, DaoResult};

#[derive(Debug, Default)]
pub struct Patch {
    assignments: Vec<String>,
    values: Vec<Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V>(mut self, column: &'static str, value: Option<V>) -> Self
    where
        V: Into<Value>,
    {
        if let Some(value) = value {
            self.values.push(value.into());
            self.assignments
                .push(format!("{column} = ${}", self.values.len()));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Renders `UPDATE {target} SET ... {tail}`.
    ///
    /// `tail` receives a [`Binder`] positioned after the last assignment and
    /// returns the rest of the statement (FROM, WHERE, RETURNING). Fails with
    /// [`DaoLayerError::EmptyUpdate`] before rendering anything when no field
    /// was set.
    pub fn into_statement<F>(self, target: &str, tail: F) -> DaoResult<Statement>
    where
        F: FnOnce(&mut Binder) -> String,
    {
        if self.is_empty() {
            return Err(DaoLayerError::EmptyUpdate);
        }

        let mut binder = Binder {
            values: self.values,
        };
        let tail = tail(&mut binder);
        let sql = format!(
            "UPDATE {target} SET {} {tail}",
            self.assignments.join(", ")
        );

        Ok(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            binder.values,
        ))
    }
}

pub struct Binder {
    values: Vec<Value>,
}

impl Binder {
    /// Appends `value` and returns its placeholder.
    pub fn bind<V>(&mut self, value: V) -> String
    where
        V: Into<Value>,
    {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }
}
