use sea_orm::{Set, prelude::DateTimeWithTimeZone};
use serde::{Deserialize, Serialize};

use super::de;
use crate::db::entities::user;

#[derive(Debug, Deserialize)]
pub struct UserCreate {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "de::present")]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "deleteFlg",
        alias = "DeleteFlg",
        deserialize_with = "de::present"
    )]
    pub delete_flg: Option<bool>,
}

impl UserPatch {
    pub fn apply(self, active: &mut user::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(delete_flg) = self.delete_flg {
            active.delete_flg = Set(delete_flg);
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub delete_flg: bool,
    pub last_modified: DateTimeWithTimeZone,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            delete_flg: model.delete_flg,
            last_modified: model.last_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{UserCreate, UserPatch};

    #[test]
    fn legacy_flag_spelling_is_accepted() {
        let patch: UserPatch =
            serde_json::from_value(json!({ "DeleteFlg": true })).expect("valid patch");
        assert_eq!(patch.delete_flg, Some(true));
        assert_eq!(patch.name, None);

        let patch: UserPatch =
            serde_json::from_value(json!({ "deleteFlg": false })).expect("valid patch");
        assert_eq!(patch.delete_flg, Some(false));
    }

    #[test]
    fn null_flag_is_rejected() {
        assert!(serde_json::from_value::<UserPatch>(json!({ "deleteFlg": null })).is_err());
    }

    #[test]
    fn create_defaults_to_empty_name() {
        let body: UserCreate = serde_json::from_value(json!({})).expect("valid body");
        assert_eq!(body.name, "");
    }
}
