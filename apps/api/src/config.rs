use anyhow::{Context, Result};

const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const DEFAULT_COUNTRY: &str = "in";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Page size requested from Adzuna for every skill query.
pub const RESULTS_PER_PAGE: u32 = 10;

/// Application configuration loaded from environment variables.
/// Adzuna credentials are not checked here; a missing pair only shows up
/// as rejected upstream queries.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna: AdzunaConfig,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

/// Everything the Adzuna client needs to build a search request.
#[derive(Debug, Clone)]
pub struct AdzunaConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
    pub country: String,
    pub results_per_page: u32,
}

impl AdzunaConfig {
    /// `GET {base_url}/{country}/search/1`
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}/search/1",
            self.base_url.trim_end_matches('/'),
            self.country
        )
    }

    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            adzuna: AdzunaConfig {
                app_id: env_or("ADZUNA_APP_ID", ""),
                app_key: env_or("ADZUNA_API_KEY", ""),
                base_url: env_or("ADZUNA_BASE_URL", DEFAULT_ADZUNA_BASE_URL),
                country: env_or("ADZUNA_COUNTRY", DEFAULT_COUNTRY),
                results_per_page: RESULTS_PER_PAGE,
            },
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
