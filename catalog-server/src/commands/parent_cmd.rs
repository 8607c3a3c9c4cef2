//! Parent Routes
//!
//! Read-only listings of categories, collections and books.

use axum::extract::{Path, State};

use super::response::{ok, ApiError, ApiResult};
use crate::domain::{DomainError, ParentEntity, ParentKind};
use crate::AppState;

/// Resolve the `{parent_type}` path segment
pub(super) fn parse_kind(segment: &str) -> Result<ParentKind, ApiError> {
    ParentKind::from_path(segment)
        .ok_or_else(|| ApiError::not_found(format!("Unknown parent type {:?}", segment)))
}

/// List all parents of one type
pub async fn list_parents(
    State(state): State<AppState>,
    Path(parent_type): Path<String>,
) -> ApiResult<Vec<ParentEntity>> {
    let kind = parse_kind(&parent_type)?;
    ok(state.parents.list(kind).await?)
}

pub async fn get_parent(
    State(state): State<AppState>,
    Path((parent_type, id)): Path<(String, u32)>,
) -> ApiResult<ParentEntity> {
    let kind = parse_kind(&parent_type)?;
    let parent = state
        .parents
        .find(kind, id)
        .await?
        .ok_or_else(|| DomainError::not_found(kind.label(), id))?;
    ok(parent)
}
