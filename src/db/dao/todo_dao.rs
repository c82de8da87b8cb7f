use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter, Set};

use super::{DaoBase, DaoResult, Window};
use crate::db::entities::prelude::Todo;
use crate::db::entities::todo;

pub struct TodoDao<'a, C> {
    conn: &'a C,
}

impl<'a, C> TodoDao<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl<C> DaoBase for TodoDao<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    type Entity = Todo;
    type Conn = C;

    const ENTITY_NAME: &'static str = "Todo";

    fn conn(&self) -> &C {
        self.conn
    }
}

impl<C> TodoDao<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub async fn create_todo(
        &self,
        title: String,
        description: String,
        date: NaiveDate,
    ) -> DaoResult<todo::Model> {
        self.create(todo::ActiveModel {
            title: Set(title),
            description: Set(description),
            date: Set(date),
            completed: Set(false),
            ..Default::default()
        })
        .await
    }

    pub async fn list_for_day(&self, day: NaiveDate, window: Window) -> DaoResult<Vec<todo::Model>> {
        self.find(Some(window), |query| query.filter(todo::Column::Date.eq(day)))
            .await
    }

    /// Every todo that does not belong to `day`.
    pub async fn list_logs(&self, day: NaiveDate) -> DaoResult<Vec<todo::Model>> {
        self.find(None, |query| query.filter(todo::Column::Date.ne(day)))
            .await
    }

    pub async fn update_todo<F>(&self, id: i32, apply: F) -> DaoResult<todo::Model>
    where
        F: FnOnce(&mut todo::ActiveModel) + Send,
    {
        self.update(id, apply).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Set};

    use super::TodoDao;
    use crate::db::dao::{DaoBase, DaoLayerError, Window};
    use crate::db::entities::todo;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    fn model(id: i32, title: &str) -> todo::Model {
        todo::Model {
            id,
            title: title.to_string(),
            description: String::new(),
            date: day(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo::Model>::new()])
            .into_connection();

        let err = TodoDao::new(&db)
            .find_by_id(9)
            .await
            .expect_err("missing todo should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound {
                entity: "Todo",
                id: 9
            }
        ));
    }

    #[tokio::test]
    async fn update_without_changes_skips_the_write() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "write report")]])
            .into_connection();

        let updated = TodoDao::new(&db)
            .update_todo(1, |_| {})
            .await
            .expect("empty update should succeed");

        assert_eq!(updated, model(1, "write report"));
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn update_writes_changed_fields() {
        let mut done = model(1, "write report");
        done.completed = true;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "write report")], vec![done.clone()]])
            .into_connection();

        let updated = TodoDao::new(&db)
            .update_todo(1, |active| active.completed = Set(true))
            .await
            .expect("update should succeed");

        assert_eq!(updated, done);
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = TodoDao::new(&db)
            .delete(3)
            .await
            .expect_err("missing todo should fail");
        assert_eq!(err.to_string(), "Todo not found (id=3)");
    }

    #[tokio::test]
    async fn list_for_day_returns_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "a"), model(2, "b")]])
            .into_connection();

        let rows = TodoDao::new(&db)
            .list_for_day(day(), Window::default())
            .await
            .expect("list should succeed");

        assert_eq!(rows.iter().map(|row| row.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
