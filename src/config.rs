//! Application Configuration
//!
//! Values baked in at build time from the environment, with defaults.

use log::LevelFilter;

/// Backend used when `QBANK_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

pub const QUESTIONS_PER_PAGE: u32 = 20;
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const HIGHLIGHT_MS: u32 = 2000;
pub const SCROLL_RESTORE_DELAY_MS: u32 = 50;

/// Catalog endpoints are paged; one page this large holds the whole catalog.
pub const CATALOG_PAGE_LIMIT: u32 = 100;

pub const TITLE_CHARS_LIMIT: usize = 100;
pub const CONTENT_CHARS_LIMIT: usize = 40_000;
pub const CATEGORY_NAME_CHARS_LIMIT: usize = 50;
pub const TAG_NAME_CHARS_LIMIT: usize = 50;
pub const MAX_VISIBLE_TAGS: usize = 5;

/// Runtime configuration provided via context
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub questions_per_page: u32,
    pub search_debounce_ms: u32,
    pub highlight_ms: u32,
    pub scroll_restore_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            questions_per_page: QUESTIONS_PER_PAGE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            highlight_ms: HIGHLIGHT_MS,
            scroll_restore_delay_ms: SCROLL_RESTORE_DELAY_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build the config from `QBANK_API_URL` / `QBANK_LOG_LEVEL` captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("QBANK_API_URL"), option_env!("QBANK_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}
