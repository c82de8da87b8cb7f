use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, QueryFilter, Set};

use super::{DaoBase, DaoResult, Window};
use crate::db::entities::prelude::User;
use crate::db::entities::user;

pub struct UserDao<'a, C> {
    conn: &'a C,
}

impl<'a, C> UserDao<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl<C> DaoBase for UserDao<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    type Entity = User;
    type Conn = C;

    const ENTITY_NAME: &'static str = "User";

    fn conn(&self) -> &C {
        self.conn
    }
}

impl<C> UserDao<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    /// Soft-deleted users are included.
    pub async fn list(&self, window: Window) -> DaoResult<Vec<user::Model>> {
        self.find(Some(window), |query| query).await
    }

    pub async fn create_user(&self, name: String) -> DaoResult<user::Model> {
        self.create(user::ActiveModel {
            name: Set(name),
            delete_flg: Set(false),
            last_modified: Set(Utc::now().fixed_offset()),
            ..Default::default()
        })
        .await
    }

    /// Stamps `last_modified` on every call, so the row is always written.
    pub async fn update_user<F>(&self, id: i32, apply: F) -> DaoResult<user::Model>
    where
        F: FnOnce(&mut user::ActiveModel) + Send,
    {
        self.update(id, move |active| {
            apply(&mut *active);
            active.last_modified = Set(Utc::now().fixed_offset());
        })
        .await
    }

    /// Users that are not soft-deleted and have a non-empty name.
    pub async fn find_active_named(&self) -> DaoResult<Vec<user::Model>> {
        self.find(None, |query| query.filter(active_named())).await
    }
}

/// Not soft-deleted, with a non-empty name. `_` is the one-character wildcard.
pub(crate) fn active_named() -> Condition {
    Condition::all()
        .add(user::Column::Name.like("_%"))
        .add(user::Column::DeleteFlg.eq(false))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, Set};

    use super::UserDao;
    use crate::db::dao::DaoLayerError;
    use crate::db::entities::user;

    fn model(id: i32, name: &str) -> user::Model {
        user::Model {
            id,
            name: name.to_string(),
            delete_flg: false,
            last_modified: FixedOffset::east_opt(0)
                .expect("utc offset")
                .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let err = UserDao::new(&db)
            .update_user(42, |active| active.name = Set("bob".to_string()))
            .await
            .expect_err("missing user should fail");

        assert!(matches!(
            err,
            DaoLayerError::NotFound {
                entity: "User",
                id: 42
            }
        ));
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn update_always_writes_a_new_timestamp() {
        let mut renamed = model(1, "bob");
        renamed.last_modified = renamed.last_modified + chrono::Duration::minutes(5);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "bob")], vec![renamed.clone()]])
            .into_connection();

        let updated = UserDao::new(&db)
            .update_user(1, |_| {})
            .await
            .expect("update should succeed");

        assert_eq!(updated, renamed);
        assert_eq!(db.into_transaction_log().len(), 2);
    }
}
