use sea_orm::DatabaseConnection;

use super::{begin, commit};
use crate::{
    db::dao::{DaoContext, Window},
    db::entities::user,
    error::AppError,
    schemas::{UserCreate, UserPatch},
};

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, window: Window) -> Result<Vec<user::Model>, AppError> {
        let txn = begin(&self.db).await?;
        let users = DaoContext::new(&txn).user().list(window).await?;
        commit(txn).await?;
        Ok(users)
    }

    pub async fn create(&self, body: UserCreate) -> Result<user::Model, AppError> {
        let txn = begin(&self.db).await?;
        let user = DaoContext::new(&txn).user().create_user(body.name).await?;
        commit(txn).await?;
        tracing::info!(id = user.id, "user created");
        Ok(user)
    }

    /// 404 when the user does not exist; otherwise applies the supplied
    /// fields and refreshes `last_modified`.
    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<user::Model, AppError> {
        let txn = begin(&self.db).await?;
        let user = DaoContext::new(&txn)
            .user()
            .update_user(id, |active| patch.apply(active))
            .await?;
        commit(txn).await?;
        Ok(user)
    }
}
