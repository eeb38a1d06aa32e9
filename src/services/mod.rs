pub mod auth_service;
pub mod context;
pub mod crud_errors;
pub mod todo_item_service;
pub mod todo_list_service;

pub use auth_service::AuthService;
pub use context::ServiceContext;
pub use crud_errors::{CrudErrors, CrudOp};
pub use todo_item_service::TodoItemService;
pub use todo_list_service::TodoListService;
