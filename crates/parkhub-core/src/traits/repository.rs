//! Generic repository trait for entity collections.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic keyed repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// query methods are defined on the concrete repository structs.
///
/// Implementations must apply each mutation as an atomic
/// read-modify-write on the entity collection; the storage mechanism
/// behind the interface is an implementation choice.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// List all entities.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Insert a new entity and return it.
    async fn create(&self, entity: &Entity) -> AppResult<Entity>;

    /// Update an existing entity and return the updated version.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
