use sea_orm::DatabaseConnection;

use super::{begin, commit};
use crate::{
    db::dao::{DaoBase, DaoContext, Window},
    db::entities::task,
    error::AppError,
    schemas::{TaskCreate, TaskPatch},
};

#[derive(Clone)]
pub struct TaskService {
    db: DatabaseConnection,
}

impl TaskService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_active(&self, window: Window) -> Result<Vec<task::Model>, AppError> {
        let txn = begin(&self.db).await?;
        let tasks = DaoContext::new(&txn).task().list_active(window).await?;
        commit(txn).await?;
        Ok(tasks)
    }

    pub async fn create(&self, body: TaskCreate) -> Result<task::Model, AppError> {
        let txn = begin(&self.db).await?;
        let task = DaoContext::new(&txn)
            .task()
            .create_task(body.into_active_model())
            .await?;
        commit(txn).await?;
        tracing::info!(id = task.id, assignee_id = task.assignee_id, "task created");
        Ok(task)
    }

    pub async fn get(&self, id: i32) -> Result<task::Model, AppError> {
        let txn = begin(&self.db).await?;
        let task = DaoContext::new(&txn).task().find_by_id(id).await?;
        commit(txn).await?;
        Ok(task)
    }

    pub async fn update(&self, id: i32, patch: TaskPatch) -> Result<task::Model, AppError> {
        let txn = begin(&self.db).await?;
        let task = DaoContext::new(&txn)
            .task()
            .update_task(id, |active| patch.apply(active))
            .await?;
        commit(txn).await?;
        Ok(task)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = begin(&self.db).await?;
        DaoContext::new(&txn).task().delete(id).await?;
        commit(txn).await?;
        tracing::info!(id, "task deleted");
        Ok(())
    }
}
