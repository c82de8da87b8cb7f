use chrono::NaiveDate;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::de;
use crate::db::entities::todo;

#[derive(Debug, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodoPatch {
    #[serde(default, deserialize_with = "de::present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::present")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::present")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::present")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn apply(self, active: &mut todo::ActiveModel) {
        if let Some(title) = self.title {
            active.title = Set(title);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(date) = self.date {
            active.date = Set(date);
        }
        if let Some(completed) = self.completed {
            active.completed = Set(completed);
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub completed: bool,
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            date: model.date,
            completed: model.completed,
        }
    }
}
