pub mod base;
mod context;
pub mod error;
pub mod patch;
pub mod todo_item_dao;
pub mod todo_list_dao;
pub mod user_dao;

pub use base::DaoBase;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use patch::Patch;
pub use todo_item_dao::{NewTodoItem, TodoItemDao, TodoItemPatch};
pub use todo_list_dao::{NewTodoList, TodoListDao, TodoListPatch};
pub use user_dao::UserDao;
