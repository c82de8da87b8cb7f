use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    FromQueryResult, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Select,
};
use serde::{Deserialize, Deserializer, de::Error};

use super::base_traits::HasIdColumn;
use super::error::{DaoLayerError, DaoResult};

/// Offset/limit window for list queries. Both bounds must fit a signed
/// 64-bit integer, the widest LIMIT/OFFSET the drivers bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Window {
    #[serde(default, deserialize_with = "Window::bounded")]
    pub skip: u64,
    #[serde(default = "Window::default_limit", deserialize_with = "Window::bounded")]
    pub limit: u64,
}

impl Window {
    pub const DEFAULT_LIMIT: u64 = 100;
    pub const MAX_BOUND: u64 = i64::MAX as u64;

    fn default_limit() -> u64 {
        Self::DEFAULT_LIMIT
    }

    fn bounded<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        if value > Self::MAX_BOUND {
            return Err(D::Error::custom(format!(
                "window bound {value} exceeds {}",
                Self::MAX_BOUND
            )));
        }
        Ok(value)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[async_trait::async_trait]
pub trait DaoBase: Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult
            + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel>
            + Clone
            + Send
            + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send,
{
    type Entity: EntityTrait + HasIdColumn + Send + Sync;
    type Conn: ConnectionTrait + Send + Sync;

    const ENTITY_NAME: &'static str;

    fn conn(&self) -> &Self::Conn;

    fn not_found(id: i32) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        }
    }

    async fn create(
        &self,
        data: <Self::Entity as EntityTrait>::ActiveModel,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let model = data.insert(self.conn()).await.map_err(DaoLayerError::Db)?;
        tracing::debug!(entity = Self::ENTITY_NAME, "row inserted");
        Ok(model)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        Self::Entity::find()
            .filter(Self::Entity::id_column().eq(id))
            .one(self.conn())
            .await
            .map_err(DaoLayerError::Db)?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Rows ordered by id. `None` returns every row the filter matches.
    async fn find(
        &self,
        window: Option<Window>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        let query = apply(Self::Entity::find()).order_by_asc(Self::Entity::id_column());
        let query = match window {
            Some(window) => query.offset(window.skip).limit(window.limit),
            None => query,
        };
        query.all(self.conn()).await.map_err(DaoLayerError::Db)
    }

    /// Loads the row, lets `apply` mark changed fields, and writes only when
    /// something actually changed.
    async fn update<F>(&self, id: i32, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.clone().into_active_model();
        apply(&mut active);
        if !active.is_changed() {
            return Ok(model);
        }

        let model = active.update(self.conn()).await.map_err(DaoLayerError::Db)?;
        tracing::debug!(entity = Self::ENTITY_NAME, id, "row updated");
        Ok(model)
    }

    async fn delete(&self, id: i32) -> DaoResult<i32> {
        let result = Self::Entity::delete_many()
            .filter(Self::Entity::id_column().eq(id))
            .exec(self.conn())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        tracing::debug!(entity = Self::ENTITY_NAME, id, "row deleted");
        Ok(id)
    }
}
