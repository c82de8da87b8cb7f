use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTimeResponse {
    pub name: String,
    /// Whole minutes.
    pub completed_time: i64,
}
