//! Build configuration loaded from environment variables.
//!
//! Configuration is loaded once per run and validated before any content is
//! fetched. Command-line flags override the values read here.
//!
//! ## Content source
//!
//! ### Method 1: Full delivery URL
//!
//! ```bash
//! export CONTENT_BASE_URL="https://my-hub.cdn.content.amplience.net"
//! ```
//!
//! ### Method 2: Hub name
//!
//! ```bash
//! export CONTENT_HUB_NAME="my-hub"
//! ```
//!
//! If `CONTENT_BASE_URL` is not set, it is constructed from `CONTENT_HUB_NAME`.
//!
//! ### Method 3: Local fixtures (offline builds)
//!
//! ```bash
//! export CONTENT_FIXTURES_DIR="./content"
//! ```
//!
//! When set, content items are read from `{dir}/{id}.json` and no delivery
//! URL is required.
//!
//! ## Required Variables
//!
//! - `BLOG_LIST_ID` - Identifier of the blog list content item
//!
//! ## Optional Variables
//!
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 30)
//! - `MAX_CONCURRENT_FETCHES` - Post lookups in flight at once (default: 16, max: 256)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Default number of post lookups in flight.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 16;

/// Where content items are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Content delivery REST API rooted at this URL.
    Delivery { base_url: String },
    /// Directory of `{id}.json` files.
    Fixtures { dir: PathBuf },
}

/// Values supplied on the command line, taking priority over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub blog_list_id: Option<String>,
    pub fixtures_dir: Option<PathBuf>,
}

/// Run configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub content_source: ContentSource,
    pub blog_list_id: String,
    pub request_timeout_seconds: u64,
    pub max_concurrent_fetches: usize,
    pub log_level: String,
    pub log_format: String,
}

/// The part of [`Config`] the route map build itself needs.
///
/// Handed to [`crate::application::services::RouteMapService`] explicitly;
/// nothing in the build reads process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub blog_list_id: String,
    pub max_concurrent_fetches: usize,
}

impl BuildConfig {
    pub fn new(blog_list_id: impl Into<String>) -> Self {
        Self {
            blog_list_id: blog_list_id.into(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no content source is configured or `BLOG_LIST_ID`
    /// is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Loads configuration from environment variables, preferring `overrides`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`], except that an overridden value never
    /// needs its environment variable.
    pub fn from_env_with(overrides: &ConfigOverrides) -> Result<Self> {
        let content_source = match &overrides.fixtures_dir {
            Some(dir) => ContentSource::Fixtures { dir: dir.clone() },
            None => Self::load_content_source()
                .context("Failed to load content source configuration")?,
        };

        let blog_list_id = match &overrides.blog_list_id {
            Some(id) => id.clone(),
            None => env::var("BLOG_LIST_ID").context("BLOG_LIST_ID must be set")?,
        };

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let max_concurrent_fetches = env::var("MAX_CONCURRENT_FETCHES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            content_source,
            blog_list_id,
            request_timeout_seconds,
            max_concurrent_fetches,
            log_level,
            log_format,
        })
    }

    /// Loads the content source.
    ///
    /// Priority:
    /// 1. `CONTENT_FIXTURES_DIR`
    /// 2. `CONTENT_BASE_URL`
    /// 3. Constructed from `CONTENT_HUB_NAME`
    fn load_content_source() -> Result<ContentSource> {
        if let Ok(dir) = env::var("CONTENT_FIXTURES_DIR") {
            return Ok(ContentSource::Fixtures {
                dir: PathBuf::from(dir),
            });
        }

        if let Ok(url) = env::var("CONTENT_BASE_URL") {
            return Ok(ContentSource::Delivery { base_url: url });
        }

        let hub = env::var("CONTENT_HUB_NAME").context(
            "CONTENT_HUB_NAME must be set when neither CONTENT_BASE_URL nor CONTENT_FIXTURES_DIR is provided",
        )?;

        Ok(ContentSource::Delivery {
            base_url: format!("https://{}.cdn.content.amplience.net", hub),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `blog_list_id` is empty
    /// - `max_concurrent_fetches` is outside 1..=256
    /// - `request_timeout_seconds` is 0
    /// - `log_format` is not `text` or `json`
    /// - the delivery base URL is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.blog_list_id.trim().is_empty() {
            anyhow::bail!("BLOG_LIST_ID must not be empty");
        }

        if self.max_concurrent_fetches == 0 || self.max_concurrent_fetches > 256 {
            anyhow::bail!(
                "MAX_CONCURRENT_FETCHES must be between 1 and 256, got {}",
                self.max_concurrent_fetches
            );
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let ContentSource::Delivery { ref base_url } = self.content_source {
            let parsed = url::Url::parse(base_url)
                .with_context(|| format!("CONTENT_BASE_URL is not a valid URL: '{}'", base_url))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!(
                    "CONTENT_BASE_URL must start with 'http://' or 'https://', got '{}'",
                    base_url
                );
            }
        }

        Ok(())
    }

    /// The explicit value handed to the route map build.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            blog_list_id: self.blog_list_id.clone(),
            max_concurrent_fetches: self.max_concurrent_fetches,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        match &self.content_source {
            ContentSource::Delivery { base_url } => {
                tracing::info!("  Content source: {}", base_url)
            }
            ContentSource::Fixtures { dir } => {
                tracing::info!("  Content source: fixtures in {}", dir.display())
            }
        }
        tracing::info!("  Blog list: {}", self.blog_list_id);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Max concurrent fetches: {}", self.max_concurrent_fetches);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    load(&ConfigOverrides::default())
}

/// Loads configuration with command-line overrides applied, then validates it.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load(overrides: &ConfigOverrides) -> Result<Config> {
    let config = Config::from_env_with(overrides)?;
    config.validate()?;
    Ok(config)
}
