//! Request and response shapes for the JSON API.
//!
//! Patch bodies distinguish "omitted" from "null": an omitted field leaves the
//! column untouched, while an explicit `null` fails deserialization.

pub mod de;
pub mod metrics;
pub mod task;
pub mod todo;
pub mod user;

pub use metrics::CompletedTimeResponse;
pub use task::{TaskCreate, TaskPatch, TaskResponse};
pub use todo::{TodoCreate, TodoPatch, TodoResponse};
pub use user::{UserCreate, UserPatch, UserResponse};
