use sea_orm::entity::prelude::*;

use crate::db::dao::HasIdColumn;

/// `assignee_id` is a plain reference to `users.id`. No foreign key is
/// declared; listings drop orphaned tasks through an inner join instead.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: DateTime,
    pub end_date: DateTime,
    #[sea_orm(indexed)]
    pub assignee_id: i32,
    #[sea_orm(default_value = false)]
    pub delete_flg: bool,
    #[sea_orm(default_value = false)]
    pub completed: bool,
    pub last_modified: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}

impl HasIdColumn for Entity {
    fn id_column() -> Self::Column {
        Column::Id
    }
}

/// Join path from a task to the user that owns it.
pub fn assignee_relation() -> RelationDef {
    Entity::belongs_to(super::user::Entity)
        .from(Column::AssigneeId)
        .to(super::user::Column::Id)
        .into()
}
