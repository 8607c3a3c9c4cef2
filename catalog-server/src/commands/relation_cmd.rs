//! Relation Routes
//!
//! Paged listing and batch add/remove of a parent's coloring pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::parent_cmd::parse_kind;
use super::response::{ok, ApiResult};
use crate::domain::ColoringPage;
use crate::repository::{ListQuery, Paged, RelationChange, RelationOperations};
use crate::AppState;

/// Body of the batch add/remove requests
#[derive(Debug, Deserialize)]
pub struct RelationIdsRequest {
    pub ids: Vec<u32>,
}

/// List the coloring pages related to a parent
pub async fn list_related(
    State(state): State<AppState>,
    Path((parent_type, parent_id)): Path<(String, u32)>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Paged<ColoringPage>> {
    let kind = parse_kind(&parent_type)?;
    let page = state
        .relations
        .list_related(kind, parent_id, &query, state.config.max_page_size)
        .await?;
    ok(page)
}

/// Attach coloring pages to a parent
pub async fn add_related(
    State(state): State<AppState>,
    Path((parent_type, parent_id)): Path<(String, u32)>,
    Json(req): Json<RelationIdsRequest>,
) -> ApiResult<RelationChange> {
    let kind = parse_kind(&parent_type)?;
    let change = state.relations.add_relations(kind, parent_id, &req.ids).await?;
    log::info!(
        "Linked {} of {} coloring pages to {} {}",
        change.affected,
        req.ids.len(),
        kind.label(),
        parent_id
    );
    ok(change)
}

/// Detach coloring pages from a parent
pub async fn remove_related(
    State(state): State<AppState>,
    Path((parent_type, parent_id)): Path<(String, u32)>,
    Json(req): Json<RelationIdsRequest>,
) -> ApiResult<RelationChange> {
    let kind = parse_kind(&parent_type)?;
    let change = state.relations.remove_relations(kind, parent_id, &req.ids).await?;
    log::info!(
        "Unlinked {} of {} coloring pages from {} {}",
        change.affected,
        req.ids.len(),
        kind.label(),
        parent_id
    );
    ok(change)
}
