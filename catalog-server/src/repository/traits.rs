//! Repository Layer - Core Traits
//!
//! Abstract interfaces for catalog data access. The mock backend keeps
//! everything in memory; a database-backed implementation slots in here.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a new entity, assigning its id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities, ordered by id
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for repositories that support text search
#[async_trait]
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Case-insensitive substring search
    async fn search(&self, query: &str) -> DomainResult<Vec<T>>;
}
