//! Editor Configuration
//!
//! JSON-file backed settings with env overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "COLORING_ADMIN_API_URL";
pub const PAGE_SIZE_ENV: &str = "COLORING_ADMIN_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Catalog API root, e.g. `http://127.0.0.1:3000/api`
    pub base_url: String,
    /// Rows per page in both panes
    pub page_size: u32,
    /// Page size used while walking the full related set
    pub snapshot_page_size: u32,
    /// Delay before the editor closes after a successful save
    pub close_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/api".to_string(),
            page_size: 10,
            snapshot_page_size: 100,
            close_delay_ms: 1500,
            request_timeout_secs: 30,
        }
    }
}

impl EditorConfig {
    /// Load from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// Apply `COLORING_ADMIN_*` overrides
    pub fn apply_env(mut self) -> Result<Self, String> {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }
        if let Ok(size) = std::env::var(PAGE_SIZE_ENV) {
            self.page_size = size
                .trim()
                .parse()
                .map_err(|_| format!("{} must be a positive integer, got {:?}", PAGE_SIZE_ENV, size))?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("baseUrl must not be empty".to_string());
        }
        if self.page_size == 0 {
            return Err("pageSize must be at least 1".to_string());
        }
        if self.snapshot_page_size == 0 {
            return Err("snapshotPageSize must be at least 1".to_string());
        }
        Ok(())
    }
}
