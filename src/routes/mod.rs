mod entry;
pub mod extract;
mod metrics;
mod root;
mod tasks;
mod todos;
mod users;

pub use entry::{app, router};
