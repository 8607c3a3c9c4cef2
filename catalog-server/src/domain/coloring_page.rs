//! Coloring Page Entity
//!
//! The printable asset that categories, collections and books group together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A printable coloring page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoringPage {
    /// Unique identifier (0 until stored)
    pub id: u32,
    pub title: String,
    /// URL-safe name, unique across the catalog
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    /// e.g. "4-8"
    pub age_range: String,
    pub theme: String,
    pub style: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ColoringPage {
    pub fn new(title: impl Into<String>, difficulty: Difficulty, theme: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: 0,
            slug: slugify(&title),
            title,
            description: None,
            difficulty,
            age_range: "4-8".to_string(),
            theme: theme.into(),
            style: "cartoon".to_string(),
            thumbnail: None,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive match against title, slug and theme
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.slug.to_lowercase().contains(&needle)
            || self.theme.to_lowercase().contains(&needle)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("title must not be empty".to_string()));
        }
        if self.slug.trim().is_empty() || self.slug != slugify(&self.slug) {
            return Err(DomainError::InvalidInput(format!("invalid slug {:?}", self.slug)));
        }
        Ok(())
    }
}

impl Entity for ColoringPage {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Lowercase, ASCII alphanumerics joined by single dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Happy Dragon!"), "happy-dragon");
        assert_eq!(slugify("  Ocean -- Friends  "), "ocean-friends");
        assert_eq!(slugify("Unicorn #3"), "unicorn-3");
    }

    #[test]
    fn test_new_page_derives_slug() {
        let page = ColoringPage::new("Space Cat", Difficulty::Easy, "space");
        assert_eq!(page.slug, "space-cat");
        assert!(page.validate().is_ok());
        assert!(page.matches("SPACE"));
        assert!(!page.matches("dinosaur"));
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let mut page = ColoringPage::new("Space Cat", Difficulty::Easy, "space");
        page.slug = "Space Cat".to_string();
        assert!(matches!(page.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_difficulty_order_and_parse() {
        assert!(Difficulty::Easy < Difficulty::Hard);
        assert_eq!(Difficulty::parse(" Medium "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("expert"), None);
    }
}
