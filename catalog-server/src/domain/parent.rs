//! Parent Entities
//!
//! Categories, themed collections and books each own coloring pages
//! through their own join table.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Which join table a parent uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentKind {
    Category,
    Collection,
    Book,
}

impl ParentKind {
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "categories" => Some(ParentKind::Category),
            "collections" => Some(ParentKind::Collection),
            "books" => Some(ParentKind::Book),
            _ => None,
        }
    }

    /// Singular label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            ParentKind::Category => "Category",
            ParentKind::Collection => "Collection",
            ParentKind::Book => "Book",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentEntity {
    pub id: u32,
    pub name: String,
    pub display_name: Option<String>,
    pub parent_type: ParentKind,
}

impl ParentEntity {
    pub fn new(id: u32, kind: ParentKind, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            display_name: None,
            parent_type: kind,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

impl Entity for ParentEntity {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
