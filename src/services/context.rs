use sea_orm::DatabaseConnection;

use crate::{
    services::{
        metrics_service::MetricsService, task_service::TaskService, todo_service::TodoService,
        user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    db: DatabaseConnection,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(self.db.clone())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.db.clone())
    }

    pub fn task(&self) -> TaskService {
        TaskService::new(self.db.clone())
    }

    pub fn metrics(&self) -> MetricsService {
        MetricsService::new(self.db.clone())
    }
}
