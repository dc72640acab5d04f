use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all entities in the store's native order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // get an entity, None when the id is unknown
    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // inserts an entity, assigning its id when absent, or overwrites the entity with the same id
    async fn save(&self, entity: &Entity) -> LibraryResult<Entity>;

    // delete an entity, no-op when the id is unknown
    async fn delete_by_id(&self, id: &str) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
    DynamoDB,
    LocalDynamoDB,
}
