use chrono::{Local, NaiveDate};
use sea_orm::DatabaseConnection;

use super::{begin, commit};
use crate::{
    db::dao::{DaoBase, DaoContext, Window},
    db::entities::todo,
    error::AppError,
    schemas::{TodoCreate, TodoPatch},
};

/// The server's local calendar day, used to split current todos from logs.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone)]
pub struct TodoService {
    db: DatabaseConnection,
}

impl TodoService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, body: TodoCreate) -> Result<todo::Model, AppError> {
        let txn = begin(&self.db).await?;
        let todo = DaoContext::new(&txn)
            .todo()
            .create_todo(body.title, body.description.unwrap_or_default(), today())
            .await?;
        commit(txn).await?;
        tracing::info!(id = todo.id, "todo created");
        Ok(todo)
    }

    pub async fn list_today(&self, window: Window) -> Result<Vec<todo::Model>, AppError> {
        let txn = begin(&self.db).await?;
        let todos = DaoContext::new(&txn)
            .todo()
            .list_for_day(today(), window)
            .await?;
        commit(txn).await?;
        Ok(todos)
    }

    pub async fn list_logs(&self) -> Result<Vec<todo::Model>, AppError> {
        let txn = begin(&self.db).await?;
        let todos = DaoContext::new(&txn).todo().list_logs(today()).await?;
        commit(txn).await?;
        Ok(todos)
    }

    pub async fn get(&self, id: i32) -> Result<todo::Model, AppError> {
        let txn = begin(&self.db).await?;
        let todo = DaoContext::new(&txn).todo().find_by_id(id).await?;
        commit(txn).await?;
        Ok(todo)
    }

    pub async fn update(&self, id: i32, patch: TodoPatch) -> Result<todo::Model, AppError> {
        let txn = begin(&self.db).await?;
        let todo = DaoContext::new(&txn)
            .todo()
            .update_todo(id, |active| patch.apply(active))
            .await?;
        commit(txn).await?;
        Ok(todo)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = begin(&self.db).await?;
        DaoContext::new(&txn).todo().delete(id).await?;
        commit(txn).await?;
        tracing::info!(id, "todo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    use super::{TodoService, today};
    use crate::db::entities::todo;
    use crate::schemas::TodoCreate;

    #[tokio::test]
    async fn create_stamps_today_and_empty_description() {
        let stored = todo::Model {
            id: 1,
            title: "water plants".to_string(),
            description: String::new(),
            date: today(),
            completed: false,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let body: TodoCreate =
            serde_json::from_value(json!({ "title": "water plants" })).expect("valid body");

        let created = TodoService::new(db.clone())
            .create(body)
            .await
            .expect("create should succeed");
        assert_eq!(created, stored);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(&today().to_string()));
    }

    #[tokio::test]
    async fn delete_of_missing_todo_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = TodoService::new(db)
            .delete(11)
            .await
            .expect_err("missing todo should fail");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Todo not found (id=11)");
    }
}
