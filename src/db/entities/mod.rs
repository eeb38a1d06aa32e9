#[allow(unused_imports)]
pub mod prelude {
    pub use super::lists_items::Entity as ListsItems;
    pub use super::todo_item::Entity as TodoItem;
    pub use super::todo_list::Entity as TodoList;
    pub use super::user::Entity as User;
    pub use super::users_lists::Entity as UsersLists;
}

pub mod lists_items;
pub mod todo_item;
pub mod todo_list;
pub mod user;
pub mod users_lists;
