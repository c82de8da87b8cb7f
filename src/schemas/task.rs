use chrono::NaiveDateTime;
use sea_orm::{Set, prelude::DateTimeWithTimeZone};
use serde::{Deserialize, Serialize};

use super::de;
use crate::db::entities::task;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    #[serde(default)]
    pub name: String,
    pub assignee_id: i32,
    #[serde(deserialize_with = "de::datetime")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "de::datetime")]
    pub end_date: NaiveDateTime,
    #[serde(default, alias = "DeleteFlg")]
    pub delete_flg: bool,
    #[serde(default)]
    pub completed: bool,
}

impl TaskCreate {
    /// Columns for a new row; `last_modified` is stamped by the repository.
    pub fn into_active_model(self) -> task::ActiveModel {
        task::ActiveModel {
            name: Set(self.name),
            start_date: Set(self.start_date),
            end_date: Set(self.end_date),
            assignee_id: Set(self.assignee_id),
            delete_flg: Set(self.delete_flg),
            completed: Set(self.completed),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, deserialize_with = "de::present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::present_datetime")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::present_datetime")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::present")]
    pub assignee_id: Option<i32>,
    #[serde(default, alias = "DeleteFlg", deserialize_with = "de::present")]
    pub delete_flg: Option<bool>,
    #[serde(default, deserialize_with = "de::present")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn apply(self, active: &mut task::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(assignee_id) = self.assignee_id {
            active.assignee_id = Set(assignee_id);
        }
        if let Some(delete_flg) = self.delete_flg {
            active.delete_flg = Set(delete_flg);
        }
        if let Some(completed) = self.completed {
            active.completed = Set(completed);
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub assignee_id: i32,
    pub delete_flg: bool,
    pub last_modified: DateTimeWithTimeZone,
    pub completed: bool,
}

impl From<task::Model> for TaskResponse {
    fn from(model: task::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            assignee_id: model.assignee_id,
            delete_flg: model.delete_flg,
            last_modified: model.last_modified,
            completed: model.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue;
    use serde_json::json;

    use super::{TaskCreate, TaskPatch};

    #[test]
    fn create_fills_optional_flags() {
        let body: TaskCreate = serde_json::from_value(json!({
            "name": "deploy",
            "assigneeId": 3,
            "startDate": "2024-05-01T09:00:00",
            "endDate": "2024-05-01T09:30:00Z"
        }))
        .expect("valid body");

        assert!(!body.delete_flg);
        assert!(!body.completed);

        let active = body.into_active_model();
        assert_eq!(active.assignee_id, ActiveValue::Set(3));
        assert!(matches!(active.id, ActiveValue::NotSet));
    }

    #[test]
    fn create_requires_timestamps() {
        let err = serde_json::from_value::<TaskCreate>(json!({ "assigneeId": 3 }))
            .expect_err("missing dates should be rejected");
        assert!(err.to_string().contains("startDate"));
    }

    #[test]
    fn patch_parses_timestamps_and_rejects_null() {
        let patch: TaskPatch = serde_json::from_value(json!({ "endDate": "2024-05-01 10:00:00" }))
            .expect("valid patch");
        assert!(patch.end_date.is_some());
        assert!(patch.start_date.is_none());

        assert!(serde_json::from_value::<TaskPatch>(json!({ "completed": null })).is_err());
        assert!(serde_json::from_value::<TaskPatch>(json!({ "startDate": null })).is_err());
    }
}
