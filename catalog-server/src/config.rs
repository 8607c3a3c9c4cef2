//! Server Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV: &str = "CATALOG_SERVER_CONFIG";
pub const BIND_ADDR_ENV: &str = "CATALOG_BIND_ADDR";
pub const ADMIN_TOKEN_ENV: &str = "CATALOG_ADMIN_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Bearer token every request must carry
    pub admin_token: String,
    pub log_dir: PathBuf,
    /// Populate the store with the sample catalog on startup
    pub seed: bool,
    /// Upper bound for the `limit` query parameter
    pub max_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            admin_token: "dev-admin-token".to_string(),
            log_dir: PathBuf::from("logs"),
            seed: true,
            max_page_size: 100,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&raw).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// File named by `CATALOG_SERVER_CONFIG` (or defaults), then env overrides
    pub fn from_env() -> Result<Self, String> {
        let config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        config.with_overrides(
            std::env::var(BIND_ADDR_ENV).ok(),
            std::env::var(ADMIN_TOKEN_ENV).ok(),
        )
    }

    fn with_overrides(mut self, bind_addr: Option<String>, admin_token: Option<String>) -> Result<Self, String> {
        if let Some(addr) = bind_addr.filter(|a| !a.trim().is_empty()) {
            self.bind_addr = addr.trim().to_string();
        }
        if let Some(token) = admin_token.filter(|t| !t.trim().is_empty()) {
            self.admin_token = token.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.admin_token.trim().is_empty() {
            return Err("adminToken must not be empty".to_string());
        }
        if self.max_page_size == 0 {
            return Err("maxPageSize must be at least 1".to_string());
        }
        Ok(())
    }
}
