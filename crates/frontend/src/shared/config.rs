//! Tool configuration: embedded TOML defaults, optionally overridden by the
//! query string of the page the tool is served from.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid embedded config: {0}")]
    Defaults(#[from] toml::de::Error),
    #[error("invalid query overrides: {0}")]
    Overrides(#[from] serde_qs::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToolsConfig {
    pub colors: ColorsConfig,
    pub tags: TagsConfig,
    pub commit: CommitConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ColorsConfig {
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TagsConfig {
    pub da_origin: String,
    pub sheet_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommitConfig {
    /// Upper bound for sendHTML/sendText + closeLibrary
    pub timeout_ms: u32,
    /// How long the send button shows the error state
    pub error_display_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Flat query-string overrides, e.g. `?colors_endpoint=...&log_level=info`
#[derive(Debug, Deserialize, Default)]
struct ConfigOverrides {
    colors_endpoint: Option<String>,
    da_origin: Option<String>,
    tagging_path: Option<String>,
    commit_timeout_ms: Option<u32>,
    error_display_ms: Option<u32>,
    log_level: Option<String>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[colors]
endpoint = "https://colors-worker.evangeem1.workers.dev/colors"

[tags]
da_origin = "https://admin.da.live"
sheet_path = "/docs/library/tagging.json"

[commit]
timeout_ms = 15000
error_display_ms = 2000

[logging]
level = "debug"
"#;

/// Loads the embedded defaults and applies overrides from `query`
/// (with or without the leading `?`).
pub fn load_config(query: &str) -> Result<ToolsConfig, ConfigError> {
    let mut config: ToolsConfig = toml::from_str(DEFAULT_CONFIG)?;

    let query = query.trim_start_matches('?');
    if !query.is_empty() {
        let overrides: ConfigOverrides = serde_qs::from_str(query)?;
        config.apply(overrides);
    }

    Ok(config)
}

/// Reads the current page's query string, falling back to plain defaults
/// when the overrides do not parse.
pub fn load_page_config() -> Result<ToolsConfig, ConfigError> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    load_config(&search).or_else(|e| {
        log::warn!("ignoring config overrides: {}", e);
        load_config("")
    })
}

impl ToolsConfig {
    fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(endpoint) = overrides.colors_endpoint {
            self.colors.endpoint = endpoint;
        }
        if let Some(origin) = overrides.da_origin {
            self.tags.da_origin = origin;
        }
        if let Some(path) = overrides.tagging_path {
            self.tags.sheet_path = path;
        }
        if let Some(ms) = overrides.commit_timeout_ms {
            self.commit.timeout_ms = ms;
        }
        if let Some(ms) = overrides.error_display_ms {
            self.commit.error_display_ms = ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Configured log level, `Debug` when unparseable
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config("").unwrap();
        assert_eq!(
            config.colors.endpoint,
            "https://colors-worker.evangeem1.workers.dev/colors"
        );
        assert_eq!(config.tags.da_origin, contracts::host::DEFAULT_DA_ORIGIN);
        assert_eq!(config.tags.sheet_path, contracts::host::DEFAULT_TAGGING_PATH);
        assert_eq!(config.commit.error_display_ms, 2000);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_query_overrides() {
        let config =
            load_config("?commit_timeout_ms=500&log_level=warn&ref=main&colors_endpoint=http%3A%2F%2Flocalhost%2Fc")
                .unwrap();
        assert_eq!(config.commit.timeout_ms, 500);
        assert_eq!(config.commit.error_display_ms, 2000);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.colors.endpoint, "http://localhost/c");
    }

    #[test]
    fn test_bad_override_is_an_error() {
        assert!(matches!(
            load_config("commit_timeout_ms=soon"),
            Err(ConfigError::Overrides(_))
        ));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let mut config = load_config("").unwrap();
        config.logging.level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
