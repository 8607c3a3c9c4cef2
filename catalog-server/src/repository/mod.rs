//! Repository Layer
//!
//! Data access abstractions and the in-memory implementation.

mod traits;
mod db;
mod page_repo;
mod parent_repo;
mod query;
mod relation_repo;
mod seed;

#[cfg(test)]
mod tests;

pub use traits::{Repository, SearchableRepository};
pub use db::{init_db, CatalogDb, SharedDb};
pub use page_repo::ColoringPageRepository;
pub use parent_repo::ParentRepository;
pub use query::{ListQuery, PageInfo, Paged, SortField, DEFAULT_PAGE_SIZE};
pub use relation_repo::{RelationChange, RelationOperations, RelationRepository};
