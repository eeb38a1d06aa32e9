use crate::{db::dao::DaoLayerError, error::AppError};

#[derive(Clone, Copy)]
pub struct CrudErrors {
    pub create_failed: &'static str,
    pub find_failed: &'static str,
    pub not_found: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

impl CrudErrors {
    pub const DEFAULT: Self = Self {
        create_failed: "Create failed",
        find_failed: "Find failed",
        not_found: "Resource not found",
        update_failed: "Update failed",
        delete_failed: "Delete failed",
    };
}

impl Default for CrudErrors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug)]
pub enum CrudOp {
    Create,
    Find,
    List,
    Update,
    Delete,
}

impl CrudErrors {
    pub fn map(&self, op: CrudOp, err: DaoLayerError) -> AppError {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(self.not_found),
            DaoLayerError::EmptyUpdate => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(db_err) => {
                let message = match op {
                    CrudOp::Create => self.create_failed,
                    CrudOp::Find | CrudOp::List => self.find_failed,
                    CrudOp::Update => self.update_failed,
                    CrudOp::Delete => self.delete_failed,
                };
                tracing::error!(op = ?op, error = %db_err, "{message}");
                AppError::internal(message)
            }
        }
    }
}

/// Rejects titles that are blank once trimmed; returns the trimmed value.
pub fn require_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    Ok(title.to_string())
}
