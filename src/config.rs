use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Admin API
    pub server_url: String,
    pub http_timeout_secs: u64,

    // Admin UI
    pub ui_root: String,
    pub language: String,

    // Translations
    pub translations_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Admin API
            server_url: std::env::var("ADMIN_SERVER_URL")
                .context("ADMIN_SERVER_URL not set")?,
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            // Admin UI
            ui_root: std::env::var("ADMIN_UI_ROOT")
                .unwrap_or_else(|_| "/admin".to_string()),
            language: std::env::var("ADMIN_LANG")
                .unwrap_or_else(|_| "en".to_string()),

            // Translations
            translations_dir: std::env::var("TRANSLATIONS_DIR")
                .unwrap_or_else(|_| "translations".to_string()),
        })
    }
}
