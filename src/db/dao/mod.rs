pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod task_dao;
pub mod todo_dao;
pub mod user_dao;

pub use base::{DaoBase, Window};
pub use base_traits::HasIdColumn;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use task_dao::TaskDao;
pub use todo_dao::TodoDao;
pub use user_dao::UserDao;
