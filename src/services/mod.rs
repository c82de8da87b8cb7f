pub mod context;
pub mod metrics_service;
pub mod task_service;
pub mod todo_service;
pub mod user_service;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{db::dao::DaoLayerError, error::AppError};

pub use context::ServiceContext;

/// Every service operation runs inside one transaction. Dropping it without
/// `commit` rolls back.
pub(crate) async fn begin(db: &DatabaseConnection) -> Result<DatabaseTransaction, AppError> {
    Ok(db.begin().await.map_err(DaoLayerError::Db)?)
}

pub(crate) async fn commit(txn: DatabaseTransaction) -> Result<(), AppError> {
    Ok(txn.commit().await.map_err(DaoLayerError::Db)?)
}
