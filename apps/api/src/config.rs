use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::roadmap::horizon::DEFAULT_TIMELINE_MONTHS;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Replaces the embedded role catalog when set.
    pub roadmap_catalog_path: Option<PathBuf>,
    pub default_timeline_months: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            roadmap_catalog_path: optional_env("ROADMAP_CATALOG_PATH").map(PathBuf::from),
            default_timeline_months: match optional_env("DEFAULT_TIMELINE_MONTHS") {
                Some(raw) => raw
                    .parse::<u32>()
                    .context("DEFAULT_TIMELINE_MONTHS must be a whole number of months")?,
                None => DEFAULT_TIMELINE_MONTHS,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            roadmap_catalog_path: None,
            default_timeline_months: DEFAULT_TIMELINE_MONTHS,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
