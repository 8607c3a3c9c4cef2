//! Listing Queries
//!
//! Search, filter, sort and pagination shared by every listing route.

use serde::{Deserialize, Serialize};

use crate::domain::{ColoringPage, Difficulty, DomainError, DomainResult};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query string of a listing request; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub difficulty: Option<String>,
    pub age_range: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Difficulty,
    CreatedAt,
}

impl ListQuery {
    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    /// `(page, limit)` with page >= 1 and limit clamped to `1..=max_limit`
    pub fn bounds(&self, max_limit: u32) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, max_limit.max(1));
        (page, limit)
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }

    /// `(field, descending)`; unknown values are rejected
    pub fn ordering(&self) -> DomainResult<(SortField, bool)> {
        let field = match self.sort.as_deref().map(str::trim) {
            None | Some("") | Some("id") => SortField::Id,
            Some("title") => SortField::Title,
            Some("difficulty") => SortField::Difficulty,
            Some("createdAt") => SortField::CreatedAt,
            Some(other) => {
                return Err(DomainError::InvalidInput(format!("unknown sort field {:?}", other)))
            }
        };
        let descending = match self.order.as_deref().map(str::trim) {
            None | Some("") | Some("asc") => false,
            Some("desc") => true,
            Some(other) => {
                return Err(DomainError::InvalidInput(format!("unknown sort order {:?}", other)))
            }
        };
        Ok((field, descending))
    }

    /// Search text plus the difficulty/age/theme filters
    pub fn accepts(&self, page: &ColoringPage) -> DomainResult<bool> {
        if !page.matches(self.search()) {
            return Ok(false);
        }
        if let Some(raw) = self.difficulty.as_deref().filter(|d| !d.trim().is_empty()) {
            let difficulty = Difficulty::parse(raw)
                .ok_or_else(|| DomainError::InvalidInput(format!("unknown difficulty {:?}", raw)))?;
            if page.difficulty != difficulty {
                return Ok(false);
            }
        }
        if let Some(age) = self.age_range.as_deref().filter(|a| !a.trim().is_empty()) {
            if page.age_range != age.trim() {
                return Ok(false);
            }
        }
        if let Some(theme) = self.theme.as_deref().filter(|t| !t.trim().is_empty()) {
            if !page.theme.eq_ignore_ascii_case(theme.trim()) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Sort pages in place; ties fall back to id
pub fn sort_pages(pages: &mut [ColoringPage], field: SortField, descending: bool) {
    pages.sort_by(|a, b| {
        let ord = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Difficulty => a.difficulty.cmp(&b.difficulty),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
        .then(a.id.cmp(&b.id));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

/// Cut one page out of an already filtered and sorted list
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> Paged<T> {
    let total_count = items.len() as u32;
    let total_pages = total_count.div_ceil(limit);
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    Paged {
        items: items.into_iter().skip(start).take(limit as usize).collect(),
        pagination: PageInfo {
            current_page: page,
            total_pages,
            total_count,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_clamp() {
        assert_eq!(ListQuery::default().bounds(100), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(ListQuery::paged(0, 0).bounds(100), (1, 1));
        assert_eq!(ListQuery::paged(3, 500).bounds(100), (3, 100));
    }

    #[test]
    fn test_paginate_edges() {
        let page = paginate((1..=23).collect::<Vec<u32>>(), 3, 10);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);

        let empty = paginate(Vec::<u32>::new(), 1, 10);
        assert_eq!(empty.pagination.total_pages, 0);
        assert!(!empty.pagination.has_next_page);

        let past_end = paginate((1..=5).collect::<Vec<u32>>(), 4, 5);
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_ordering_rejects_unknown() {
        let mut q = ListQuery::default();
        assert_eq!(q.ordering().unwrap(), (SortField::Id, false));
        q.sort = Some("createdAt".to_string());
        q.order = Some("desc".to_string());
        assert_eq!(q.ordering().unwrap(), (SortField::CreatedAt, true));
        q.sort = Some("popularity".to_string());
        assert!(q.ordering().is_err());
    }

    #[test]
    fn test_accepts_filters() {
        let page = ColoringPage::new("Friendly Shark", Difficulty::Medium, "ocean");
        let mut q = ListQuery::default().with_search("shark");
        assert!(q.accepts(&page).unwrap());
        q.difficulty = Some("hard".to_string());
        assert!(!q.accepts(&page).unwrap());
        q.difficulty = Some("medium".to_string());
        q.theme = Some("Ocean".to_string());
        assert!(q.accepts(&page).unwrap());
        q.difficulty = Some("impossible".to_string());
        assert!(q.accepts(&page).is_err());
    }
}
