//! Generic document store trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Whole-document persistence keyed by identity.
///
/// Each entity maps to one stored document. `save` replaces the stored
/// document wholesale; there is no field-level patching and no optimistic
/// concurrency check, so the last writer wins. Entity-specific queries are
/// declared on sub-traits next to their implementations.
#[async_trait]
pub trait DocumentStore<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find a document by its identity.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Insert a new document and return it as stored.
    async fn create(&self, entity: &Entity) -> AppResult<Entity>;

    /// Replace an existing document. Fails with `NotFound` if it is gone.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;
}
