//! Coloring Page Routes
//!
//! CRUD over the catalog plus the filtered, sorted listing.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::response::{ok, ApiResult};
use crate::domain::{slugify, ColoringPage, Difficulty, DomainError};
use crate::repository::{ListQuery, Paged, Repository};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub age_range: Option<String>,
    pub theme: String,
    pub style: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub age_range: Option<String>,
    pub theme: Option<String>,
    pub style: Option<String>,
    pub thumbnail: Option<String>,
}

/// List coloring pages
pub async fn list_pages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Paged<ColoringPage>> {
    let page = state.pages.query(&query, state.config.max_page_size).await?;
    ok(page)
}

/// Get coloring page by ID
pub async fn get_page(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<ColoringPage> {
    let page = state
        .pages
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Coloring page", id))?;
    ok(page)
}

/// Create a new coloring page
pub async fn create_page(
    State(state): State<AppState>,
    Json(req): Json<CreatePageRequest>,
) -> ApiResult<ColoringPage> {
    let mut page = ColoringPage::new(req.title, req.difficulty.unwrap_or(Difficulty::Easy), req.theme);
    if let Some(slug) = req.slug {
        page.slug = slugify(&slug);
    }
    page.description = req.description;
    if let Some(age_range) = req.age_range {
        page.age_range = age_range;
    }
    if let Some(style) = req.style {
        page.style = style;
    }
    page.thumbnail = req.thumbnail;

    let created = state.pages.create(&page).await?;
    log::info!("Created coloring page {} ({})", created.id, created.slug);
    ok(created)
}

/// Update coloring page
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<UpdatePageRequest>,
) -> ApiResult<ColoringPage> {
    let existing = state
        .pages
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Coloring page", id))?;

    let updated = ColoringPage {
        id: existing.id,
        title: req.title.unwrap_or(existing.title),
        slug: req.slug.unwrap_or(existing.slug),
        description: req.description.or(existing.description),
        difficulty: req.difficulty.unwrap_or(existing.difficulty),
        age_range: req.age_range.unwrap_or(existing.age_range),
        theme: req.theme.unwrap_or(existing.theme),
        style: req.style.unwrap_or(existing.style),
        thumbnail: req.thumbnail.or(existing.thumbnail),
        created_at: existing.created_at,
    };

    ok(state.pages.update(&updated).await?)
}

/// Delete coloring page, unlinking it from every parent
pub async fn delete_page(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<u32> {
    state.pages.delete(id).await?;
    ok(id)
}
