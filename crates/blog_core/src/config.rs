//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values count as unset.
//! - Resolution never fails; invalid values fall back to defaults with a
//!   `warn` line.

use crate::i18n::Locale;
use crate::logging::default_log_level;
use log::warn;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "BLOG_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "BLOG_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "BLOG_LOG_DIR";
pub const LOCALE_ENV: &str = "BLOG_LOCALE";

const DEFAULT_DB_FILE_NAME: &str = "blog.sqlite3";

/// Where the blog lives and how it logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// SQLite file holding the key-value slots.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Locale used when storage has none.
    pub default_locale: Locale,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            default_locale: Locale::default(),
        }
    }
}

impl BlogConfig {
    /// Reads `BLOG_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config.log_dir = read(LOG_DIR_ENV).map(PathBuf::from);
        if let Some(code) = read(LOCALE_ENV) {
            match code.parse::<Locale>() {
                Ok(locale) => config.default_locale = locale,
                Err(err) => warn!("event=config_load module=config status=degraded error={err}"),
            }
        }
        config
    }
}
