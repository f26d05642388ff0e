use config::{Config as ConfigBuilder, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::{SalesDashError, SalesDashResult};

pub const DEFAULT_SALES_REPS_URL: &str = "http://localhost:8000/api/sales-reps";
pub const DEFAULT_PAGE_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_AI_PATH: &str = "/api/ai";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

/// Where the two endpoints live.
///
/// The sales-rep list is a fixed absolute URL. The AI endpoint is a path
/// relative to the page origin, the same way a browser page would resolve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_sales_reps_url")]
    pub sales_reps_url: String,

    #[serde(default = "default_page_origin")]
    pub page_origin: String,

    #[serde(default = "default_ai_path")]
    pub ai_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json_format: bool,

    #[serde(default)]
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_sales_reps_url() -> String {
    DEFAULT_SALES_REPS_URL.to_string()
}

fn default_page_origin() -> String {
    DEFAULT_PAGE_ORIGIN.to_string()
}

fn default_ai_path() -> String {
    DEFAULT_AI_PATH.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_theme() -> String {
    "Tokyo Night".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            sales_reps_url: default_sales_reps_url(),
            page_origin: default_page_origin(),
            ai_path: default_ai_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
            file_path: String::new(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme(),
        }
    }
}

impl ApiConfig {
    pub fn sales_reps_url(&self) -> SalesDashResult<Url> {
        parse_http_url("api.sales_reps_url", &self.sales_reps_url)
    }

    /// Resolves the relative AI path against the page origin.
    pub fn ai_url(&self) -> SalesDashResult<Url> {
        let origin = parse_http_url("api.page_origin", &self.page_origin)?;
        origin
            .join(&self.ai_path)
            .map_err(|e| SalesDashError::InvalidConfigValue {
                key: "api.ai_path".to_string(),
                message: e.to_string(),
            })
    }
}

impl DashboardConfig {
    pub fn load() -> SalesDashResult<Self> {
        Self::load_from_paths(get_config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> SalesDashResult<Self> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SALESDASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut dashboard_config: DashboardConfig = builder.build()?.try_deserialize()?;

        if let Ok(level) = std::env::var("SALESDASH_LOG_LEVEL") {
            dashboard_config.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            dashboard_config.logging.level = level;
        }

        dashboard_config.validate()?;

        Ok(dashboard_config)
    }

    pub fn validate(&self) -> SalesDashResult<()> {
        self.api.sales_reps_url()?;
        parse_http_url("api.page_origin", &self.api.page_origin)?;

        if !self.api.ai_path.starts_with('/') {
            return Err(SalesDashError::InvalidConfigValue {
                key: "api.ai_path".to_string(),
                message: "Must be a path starting with '/'".to_string(),
            });
        }

        if self.tui.tick_rate_ms == 0 {
            return Err(SalesDashError::InvalidConfigValue {
                key: "tui.tick_rate_ms".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if !is_valid_log_filter(&self.logging.level) {
            return Err(SalesDashError::InvalidConfigValue {
                key: "logging.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Use one of {:?} or a filter such as 'salesdash_core=debug'",
                    self.logging.level, LOG_LEVELS
                ),
            });
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Log file for front ends that cannot write to the terminal.
    pub fn log_file_path(&self, file_name: &str) -> Option<PathBuf> {
        if !self.logging.file_path.is_empty() {
            return Some(PathBuf::from(&self.logging.file_path));
        }
        get_data_dir().map(|d| d.join(file_name))
    }
}

/// A level name, or a comma-separated list of directives that each name a
/// level or carry `=`, that also parses as an `EnvFilter`.
fn is_valid_log_filter(filter: &str) -> bool {
    let directives_ok = filter.split(',').all(|directive| {
        let directive = directive.trim().to_lowercase();
        LOG_LEVELS.contains(&directive.as_str()) || directive.contains('=')
    });

    directives_ok && EnvFilter::try_new(filter).is_ok()
}

fn parse_http_url(key: &str, value: &str) -> SalesDashResult<Url> {
    let url = Url::parse(value).map_err(|e| SalesDashError::InvalidConfigValue {
        key: key.to_string(),
        message: format!("'{}' is not an absolute URL: {}", value, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SalesDashError::InvalidConfigValue {
            key: key.to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
        });
    }

    Ok(url)
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config").join("default.toml"));
        paths.push(cwd.join("config").join("local.toml"));
        paths.push(cwd.join("salesdash.toml"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
        paths.push(cwd.join(".env.local"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join(".env"));
    }

    for path in paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("salesdash"))
}

pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("salesdash"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();

        assert_eq!(
            config.api.sales_reps_url,
            "http://localhost:8000/api/sales-reps"
        );
        assert_eq!(config.api.page_origin, "http://localhost:3000");
        assert_eq!(config.api.ai_path, "/api/ai");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.tui.theme, "Tokyo Night");
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(DashboardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_relative_sales_reps_url() {
        let mut config = DashboardConfig::default();
        config.api.sales_reps_url = "/api/sales-reps".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_non_http_origin() {
        let mut config = DashboardConfig::default();
        config.api.page_origin = "ftp://localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_ai_path_without_slash() {
        let mut config = DashboardConfig::default();
        config.api.ai_path = "api/ai".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_tick_rate() {
        let mut config = DashboardConfig::default();
        config.tui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_log_levels() {
        let mut config = DashboardConfig::default();
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "salesdash_core=debug,reqwest=warn".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "salesdash_core=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_off() {
        let mut config = DashboardConfig::default();
        for level in ["off", "OFF", "warn,reqwest=off", "salesdash_core=off"] {
            config.logging.level = level.to_string();
            assert!(config.validate().is_ok(), "{level} should be accepted");
        }
    }

    #[test]
    fn test_ai_url_resolves_against_origin() {
        let api = ApiConfig::default();
        assert_eq!(api.ai_url().unwrap().as_str(), "http://localhost:3000/api/ai");

        let api = ApiConfig {
            page_origin: "https://dash.example.com/app/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(
            api.ai_url().unwrap().as_str(),
            "https://dash.example.com/api/ai"
        );
    }

    #[test]
    fn test_log_file_path_prefers_configured_path() {
        let mut config = DashboardConfig::default();
        config.logging.file_path = "/tmp/salesdash.log".to_string();
        assert_eq!(
            config.log_file_path("salesdash-tui.log"),
            Some(PathBuf::from("/tmp/salesdash.log"))
        );
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salesdash.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[api]\nsales_reps_url = \"http://reps.internal:9000/api/sales-reps\"\n\n[tui]\ntheme = \"Nord\""
        )
        .unwrap();

        let config = DashboardConfig::load_from_paths(vec![path]).unwrap();
        assert_eq!(
            config.api.sales_reps_url,
            "http://reps.internal:9000/api/sales-reps"
        );
        assert_eq!(config.api.ai_path, "/api/ai");
        assert_eq!(config.tui.theme, "Nord");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salesdash.toml");
        std::fs::write(&path, "[api]\nai_path = \"no-leading-slash\"\n").unwrap();

        let err = DashboardConfig::load_from_paths(vec![path]).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_directory_helpers() {
        assert!(get_config_dir().is_some());
        assert!(get_data_dir().is_some());
    }
}
