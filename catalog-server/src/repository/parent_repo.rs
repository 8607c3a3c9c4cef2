//! Parent Repository
//!
//! Read access to categories, collections and books.

use super::db::SharedDb;
use crate::domain::{DomainResult, ParentEntity, ParentKind};

pub struct ParentRepository {
    db: SharedDb,
}

impl ParentRepository {
    pub fn new(db: SharedDb) -> Self {
        Self { db }
    }

    /// All parents of one kind, ordered by id
    pub async fn list(&self, kind: ParentKind) -> DomainResult<Vec<ParentEntity>> {
        let db = self.db.lock().await;
        Ok(db
            .parents
            .range((kind, 0)..=(kind, u32::MAX))
            .map(|(_, parent)| parent.clone())
            .collect())
    }

    pub async fn find(&self, kind: ParentKind, id: u32) -> DomainResult<Option<ParentEntity>> {
        let db = self.db.lock().await;
        Ok(db.parents.get(&(kind, id)).cloned())
    }
}
