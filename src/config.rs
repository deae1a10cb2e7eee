//! Runtime configuration.
//!
//! Precedence, lowest first: compiled-in defaults, environment
//! (`CIVIC_API_URL`, `CIVIC_LOG`), command-line flags.
//!
//! ```
//! use civic::config::Config;
//!
//! let config = Config::default()
//!     .with_base_url("http://localhost:8000")
//!     .with_user_role(Some("student".to_string()));
//! assert_eq!(config.base_url, "http://localhost:8000");
//! ```

use crate::api::DEFAULT_BASE_URL;
use crate::cli::CliArgs;

/// Overrides the backend base URL.
pub const ENV_API_URL: &str = "CIVIC_API_URL";

/// Log filter in `EnvFilter` syntax.
pub const ENV_LOG: &str = "CIVIC_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Sent as `user_role`; `None` lets the backend default apply.
    pub user_role: Option<String>,
    /// Sent as `language` on explain requests.
    pub language: Option<String>,
    /// Prefills the location field on the actions screen.
    pub default_location: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_role: None,
            language: None,
            default_location: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_user_role(mut self, role: Option<String>) -> Self {
        self.user_role = role;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn with_default_location(mut self, location: Option<String>) -> Self {
        self.default_location = location;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(url) = get(ENV_API_URL) {
            config.base_url = url;
        }
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }
        config
    }

    /// Apply command-line overrides.
    pub fn merge_args(mut self, args: &CliArgs) -> Self {
        if let Some(url) = &args.base_url {
            self.base_url = url.clone();
        }
        if args.role.is_some() {
            self.user_role = args.role.clone();
        }
        if args.language.is_some() {
            self.language = args.language.clone();
        }
        if args.location.is_some() {
            self.default_location = args.location.clone();
        }
        self
    }
}
