//! Domain Layer
//!
//! Catalog entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for serialization).

mod coloring_page;
mod entity;
mod parent;

pub use coloring_page::{slugify, ColoringPage, Difficulty};
pub use entity::{DomainError, DomainResult, Entity};
pub use parent::{ParentEntity, ParentKind};
