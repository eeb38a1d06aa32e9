use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "todo_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    #[sea_orm(has_many)]
    pub users_lists: HasMany<super::users_lists::Entity>,
    #[sea_orm(has_many)]
    pub lists_items: HasMany<super::lists_items::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
