use std::collections::{BTreeMap, HashMap};

use sea_orm::DatabaseConnection;

use super::{begin, commit};
use crate::{
    db::dao::DaoContext,
    db::entities::{task, user},
    error::AppError,
    schemas::CompletedTimeResponse,
};

#[derive(Clone)]
pub struct MetricsService {
    db: DatabaseConnection,
}

impl MetricsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn completed_task_time_by_user(
        &self,
    ) -> Result<Vec<CompletedTimeResponse>, AppError> {
        let txn = begin(&self.db).await?;
        let daos = DaoContext::new(&txn);
        let users = daos.user().find_active_named().await?;
        let tasks = daos.task().find_completed_of_active_named().await?;
        commit(txn).await?;

        Ok(completed_time_by_user(&users, &tasks))
    }
}

/// Sums completed minutes per user name. Each task counts its duration in
/// whole minutes, truncated toward zero, before the sum. Users without tasks
/// report 0 and users sharing a name are merged. Output is ordered by name.
pub fn completed_time_by_user(
    users: &[user::Model],
    tasks: &[task::Model],
) -> Vec<CompletedTimeResponse> {
    let owners: HashMap<i32, &str> = users
        .iter()
        .map(|user| (user.id, user.name.as_str()))
        .collect();
    let mut minutes: BTreeMap<&str, i64> = users
        .iter()
        .map(|user| (user.name.as_str(), 0))
        .collect();

    for task in tasks {
        if let Some(&name) = owners.get(&task.assignee_id) {
            *minutes.entry(name).or_default() += task_minutes(task);
        }
    }

    minutes
        .into_iter()
        .map(|(name, completed_time)| CompletedTimeResponse {
            name: name.to_string(),
            completed_time,
        })
        .collect()
}

fn task_minutes(task: &task::Model) -> i64 {
    (task.end_date - task.start_date).num_seconds() / 60
}
