//! Relation API Seam
//!
//! The four boundary operations the editor consumes.

use async_trait::async_trait;

use super::ApiResult;
use crate::models::{Page, PageQuery, ParentRef, RelatableItem, RelationChange};

/// Catalog operations used by the relation editor.
///
/// Implementations decide transport and authentication; the editor
/// only sees typed results.
#[async_trait]
pub trait RelationApi: Send + Sync {
    /// `GET relations(parentType, parentId, page, limit, q)`
    async fn list_related(
        &self,
        parent: ParentRef,
        query: &PageQuery,
    ) -> ApiResult<Page<RelatableItem>>;

    /// `GET candidates(page, limit, q)`, never scoped by parent
    async fn list_candidates(&self, query: &PageQuery) -> ApiResult<Page<RelatableItem>>;

    /// `POST relations(parentType, parentId, {ids})`
    async fn add_relations(&self, parent: ParentRef, ids: &[u32]) -> ApiResult<RelationChange>;

    /// `DELETE relations(parentType, parentId, {ids})`
    async fn remove_relations(&self, parent: ParentRef, ids: &[u32]) -> ApiResult<RelationChange>;
}
