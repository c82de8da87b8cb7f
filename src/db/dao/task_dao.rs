use chrono::Utc;
use sea_orm::{ColumnTrait, ConnectionTrait, JoinType, QueryFilter, QuerySelect, Set};

use super::{DaoBase, DaoResult, Window, user_dao::active_named};
use crate::db::entities::prelude::Task;
use crate::db::entities::{task, user};

pub struct TaskDao<'a, C> {
    conn: &'a C,
}

impl<'a, C> TaskDao<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl<C> DaoBase for TaskDao<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    type Entity = Task;
    type Conn = C;

    const ENTITY_NAME: &'static str = "Task";

    fn conn(&self) -> &C {
        self.conn
    }
}

impl<C> TaskDao<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    /// Live tasks whose assignee exists and is not soft-deleted.
    pub async fn list_active(&self, window: Window) -> DaoResult<Vec<task::Model>> {
        self.find(Some(window), |query| {
            query
                .join(JoinType::InnerJoin, task::assignee_relation())
                .filter(task::Column::DeleteFlg.eq(false))
                .filter(user::Column::DeleteFlg.eq(false))
        })
        .await
    }

    pub async fn create_task(&self, mut active: task::ActiveModel) -> DaoResult<task::Model> {
        active.last_modified = Set(Utc::now().fixed_offset());
        self.create(active).await
    }

    pub async fn update_task<F>(&self, id: i32, apply: F) -> DaoResult<task::Model>
    where
        F: FnOnce(&mut task::ActiveModel) + Send,
    {
        self.update(id, move |active| {
            apply(&mut *active);
            active.last_modified = Set(Utc::now().fixed_offset());
        })
        .await
    }

    /// Completed, live tasks whose assignee is an active named user.
    pub async fn find_completed_of_active_named(&self) -> DaoResult<Vec<task::Model>> {
        self.find(None, |query| {
            query
                .join(JoinType::InnerJoin, task::assignee_relation())
                .filter(task::Column::Completed.eq(true))
                .filter(task::Column::DeleteFlg.eq(false))
                .filter(active_named())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};

    use super::TaskDao;
    use crate::db::dao::{DaoBase, Window};
    use crate::db::entities::task;

    fn model(id: i32) -> task::Model {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid timestamp");
        task::Model {
            id,
            name: "deploy".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::minutes(30),
            assignee_id: 1,
            delete_flg: false,
            completed: true,
            last_modified: FixedOffset::east_opt(0)
                .expect("utc offset")
                .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[tokio::test]
    async fn completed_lookup_joins_instead_of_listing_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1)]])
            .into_connection();

        let rows = TaskDao::new(&db)
            .find_completed_of_active_named()
            .await
            .expect("lookup should succeed");
        assert_eq!(rows, vec![model(1)]);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("INNER JOIN"));
        assert!(sql.contains("LIKE"));
        assert!(!sql.contains(" IN ("));
    }

    #[tokio::test]
    async fn list_active_joins_the_assignee() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1)]])
            .into_connection();

        let rows = TaskDao::new(&db)
            .list_active(Window::default())
            .await
            .expect("list should succeed");
        assert_eq!(rows, vec![model(1)]);

        let log = db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("INNER JOIN"));
    }

    #[tokio::test]
    async fn create_stamps_last_modified() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(5)]])
            .into_connection();

        let created = TaskDao::new(&db)
            .create_task(task::ActiveModel {
                name: Set("deploy".to_string()),
                ..Default::default()
            })
            .await
            .expect("create should succeed");
        assert_eq!(created.id, 5);

        let sql = format!("{:?}", db.into_transaction_log()[0]);
        assert!(sql.contains("last_modified"));
    }

    #[tokio::test]
    async fn delete_removes_existing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let id = TaskDao::new(&db).delete(5).await.expect("delete should succeed");
        assert_eq!(id, 5);
    }
}
