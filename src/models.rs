//! Editor Models
//!
//! Data structures matching the catalog backend's wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::commands::{ApiError, ApiResult};

/// Which relation table a parent entity owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentType {
    Category,
    Collection,
    Book,
}

impl ParentType {
    /// Path segment used by the REST routes
    pub fn as_path(&self) -> &'static str {
        match self {
            ParentType::Category => "categories",
            ParentType::Collection => "collections",
            ParentType::Book => "books",
        }
    }

    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "categories" => Some(ParentType::Category),
            "collections" => Some(ParentType::Collection),
            "books" => Some(ParentType::Book),
            _ => None,
        }
    }
}

impl fmt::Display for ParentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Identifies the container whose relations are being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    pub parent_type: ParentType,
    pub id: u32,
}

impl ParentRef {
    pub fn new(parent_type: ParentType, id: u32) -> Self {
        Self { parent_type, id }
    }
}

/// Parent entity as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentEntity {
    pub id: u32,
    pub name: String,
    pub display_name: Option<String>,
    pub parent_type: ParentType,
}

impl ParentEntity {
    pub fn parent_ref(&self) -> ParentRef {
        ParentRef::new(self.parent_type, self.id)
    }

    /// Name shown in the editor header
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// A coloring page that can be attached to a parent.
///
/// Identity for every set operation is `id` alone; the remaining
/// fields are display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatableItem {
    pub id: u32,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl RelatableItem {
    pub fn new(id: u32, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            difficulty: None,
            age_range: None,
            theme: None,
            style: None,
            thumbnail: None,
        }
    }

    /// Case-insensitive match on title, slug or theme, as the catalog search does.
    /// An empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.slug.to_lowercase().contains(&needle)
            || self
                .theme
                .as_deref()
                .is_some_and(|theme| theme.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Query string for paged listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl PageQuery {
    pub fn new(page: u32, limit: u32, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page.max(1),
            limit,
            q: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

/// Body of the batch add/remove requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationIds {
    pub ids: Vec<u32>,
}

/// Result of a batch add/remove
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationChange {
    pub parent_type: ParentType,
    pub parent_id: u32,
    /// Join rows actually inserted or deleted
    pub affected: u32,
    pub related_count: u32,
}

/// Uniform response envelope used by every backend route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// `success: false` and a missing payload are both failures
    pub fn into_result(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Server(
                self.error.unwrap_or_else(|| "request was not successful".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response envelope has no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_type_paths() {
        for t in [ParentType::Category, ParentType::Collection, ParentType::Book] {
            assert_eq!(ParentType::from_path(t.as_path()), Some(t));
        }
        assert_eq!(ParentType::from_path("pages"), None);
    }

    #[test]
    fn test_item_wire_format_is_camel_case() {
        let json = r#"{"id":3,"title":"Happy Dragon","slug":"happy-dragon","ageRange":"4-8"}"#;
        let item: RelatableItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.age_range.as_deref(), Some("4-8"));
        assert!(item.thumbnail.is_none());
    }

    #[test]
    fn test_envelope_failure_keeps_server_message() {
        let env: ApiEnvelope<RelationChange> =
            serde_json::from_str(r#"{"success":false,"error":"Category 9 not found"}"#).unwrap();
        match env.into_result() {
            Err(ApiError::Server(msg)) => assert_eq!(msg, "Category 9 not found"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_item_matches_title_slug_and_theme() {
        let mut item = RelatableItem::new(4, "Friendly Shark", "friendly-shark");
        assert!(item.matches("SHARK"));
        assert!(item.matches(""));
        assert!(!item.matches("ocean"));

        item.theme = Some("Ocean".to_string());
        assert!(item.matches("ocean"));
        assert!(!item.matches("jungle"));
    }

    #[test]
    fn test_envelope_success_without_data_is_decode_error() {
        let env: ApiEnvelope<Pagination> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(env.into_result(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_page_query_drops_blank_search() {
        let q = PageQuery::new(0, 10, "   ");
        assert_eq!(q.page, 1);
        assert!(q.q.is_none());
        assert_eq!(PageQuery::new(2, 10, " cat ").q.as_deref(), Some("cat"));
    }
}
