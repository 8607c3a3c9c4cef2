//! Parent-Page Relationship Operations
//!
//! Batch add/remove over the category, collection and book join tables.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::db::{CatalogDb, SharedDb};
use super::query::{paginate, ListQuery, Paged};
use crate::domain::{ColoringPage, DomainError, DomainResult, ParentKind};

/// Outcome of a batch add/remove
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationChange {
    pub parent_type: ParentKind,
    pub parent_id: u32,
    /// Join rows actually inserted or deleted
    pub affected: u32,
    pub related_count: u32,
}

/// Trait for parent-page relationship operations
#[async_trait]
pub trait RelationOperations {
    /// Page ids related to a parent, in the order they were linked
    async fn related_ids(&self, kind: ParentKind, parent_id: u32) -> DomainResult<Vec<u32>>;

    /// Link pages to a parent; already-linked and unknown ids are skipped
    async fn add_relations(&self, kind: ParentKind, parent_id: u32, ids: &[u32]) -> DomainResult<RelationChange>;

    /// Unlink pages from a parent; ids that were not linked are skipped
    async fn remove_relations(&self, kind: ParentKind, parent_id: u32, ids: &[u32]) -> DomainResult<RelationChange>;

    /// Related pages filtered by `q` and paged
    async fn list_related(
        &self,
        kind: ParentKind,
        parent_id: u32,
        query: &ListQuery,
        max_limit: u32,
    ) -> DomainResult<Paged<ColoringPage>>;
}

pub struct RelationRepository {
    db: SharedDb,
}

impl RelationRepository {
    pub fn new(db: SharedDb) -> Self {
        Self { db }
    }
}

fn ensure_parent(db: &CatalogDb, kind: ParentKind, parent_id: u32) -> DomainResult<()> {
    if db.has_parent(kind, parent_id) {
        Ok(())
    } else {
        Err(DomainError::not_found(kind.label(), parent_id))
    }
}

fn ensure_ids(ids: &[u32]) -> DomainResult<()> {
    if ids.is_empty() {
        return Err(DomainError::InvalidInput("ids must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl RelationOperations for RelationRepository {
    async fn related_ids(&self, kind: ParentKind, parent_id: u32) -> DomainResult<Vec<u32>> {
        let db = self.db.lock().await;
        ensure_parent(&db, kind, parent_id)?;
        Ok(db.relations.get(&(kind, parent_id)).cloned().unwrap_or_default())
    }

    async fn add_relations(&self, kind: ParentKind, parent_id: u32, ids: &[u32]) -> DomainResult<RelationChange> {
        ensure_ids(ids)?;
        let mut db = self.db.lock().await;
        ensure_parent(&db, kind, parent_id)?;

        let known: Vec<u32> = ids.iter().copied().filter(|id| db.pages.contains_key(id)).collect();
        if known.len() < ids.len() {
            log::warn!(
                "Skipping {} unknown coloring page ids for {} {}",
                ids.len() - known.len(),
                kind.label(),
                parent_id
            );
        }

        let related = db.relations.entry((kind, parent_id)).or_default();
        let mut affected = 0;
        for id in known {
            if !related.contains(&id) {
                related.push(id);
                affected += 1;
            }
        }

        Ok(RelationChange {
            parent_type: kind,
            parent_id,
            affected,
            related_count: related.len() as u32,
        })
    }

    async fn remove_relations(&self, kind: ParentKind, parent_id: u32, ids: &[u32]) -> DomainResult<RelationChange> {
        ensure_ids(ids)?;
        let mut db = self.db.lock().await;
        ensure_parent(&db, kind, parent_id)?;

        let related = db.relations.entry((kind, parent_id)).or_default();
        let before = related.len();
        related.retain(|id| !ids.contains(id));

        Ok(RelationChange {
            parent_type: kind,
            parent_id,
            affected: (before - related.len()) as u32,
            related_count: related.len() as u32,
        })
    }

    async fn list_related(
        &self,
        kind: ParentKind,
        parent_id: u32,
        query: &ListQuery,
        max_limit: u32,
    ) -> DomainResult<Paged<ColoringPage>> {
        let (page, limit) = query.bounds(max_limit);
        let db = self.db.lock().await;
        ensure_parent(&db, kind, parent_id)?;

        let mut matched = Vec::new();
        for id in db.relations.get(&(kind, parent_id)).map(Vec::as_slice).unwrap_or(&[]) {
            if let Some(candidate) = db.pages.get(id) {
                if query.accepts(candidate)? {
                    matched.push(candidate.clone());
                }
            }
        }
        Ok(paginate(matched, page, limit))
    }
}
