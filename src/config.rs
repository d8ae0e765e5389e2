//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3001`)
//! - `PORT` - Port on `0.0.0.0`, used only when `LISTEN` is not set
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `APP_ENV` - `development` or `production` (default: `development`); selects
//!   the default CORS origins
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origin list overriding the default
//! - `ARCHIVE_URL` - TAP sync endpoint
//!   (default: `https://exoplanetarchive.ipac.caltech.edu/TAP/sync`)
//! - `ARCHIVE_TIMEOUT_MS` - Upstream request timeout (default: 10000)
//! - `ARCHIVE_USER_AGENT` - User-Agent sent upstream
//!   (default: `ExoplanetVisualization/1.0 (Educational)`)
//! - `RATE_LIMIT_PER_MINUTE` - Requests per client IP per minute on `/api/*` (default: 10)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::infrastructure::archive::ArchiveSettings;
use crate::routes::RouterSettings;

pub const DEFAULT_ARCHIVE_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
pub const DEFAULT_USER_AGENT: &str = "ExoplanetVisualization/1.0 (Educational)";
pub const DEFAULT_ARCHIVE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 10;

const PRODUCTION_ORIGINS: [&str; 2] = [
    "https://astrobc1.github.io",
    "https://www.astrobc1.github.io",
];
const DEVELOPMENT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// `development` or `production`.
    pub app_env: String,
    /// Origins allowed by CORS. Derived from `app_env` unless overridden.
    pub cors_allowed_origins: Vec<String>,
    pub archive_url: String,
    pub archive_timeout_ms: u64,
    pub archive_user_agent: String,
    /// Admission budget per client IP on `/api/*`.
    pub rate_limit_per_minute: u32,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let cors_allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(list) => parse_origin_list(&list),
            Err(_) => default_origins(&app_env),
        };

        let archive_url = env::var("ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_ARCHIVE_URL.to_string());
        let archive_user_agent =
            env::var("ARCHIVE_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let archive_timeout_ms = parse_var("ARCHIVE_TIMEOUT_MS")?.unwrap_or(DEFAULT_ARCHIVE_TIMEOUT_MS);
        let rate_limit_per_minute =
            parse_var("RATE_LIMIT_PER_MINUTE")?.unwrap_or(DEFAULT_RATE_LIMIT_PER_MINUTE);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            app_env,
            cors_allowed_origins,
            archive_url,
            archive_timeout_ms,
            archive_user_agent,
            rate_limit_per_minute,
            behind_proxy,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`
    /// 3. `0.0.0.0:3001`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `app_env` is not `development` or `production`
    /// - `listen_addr` is not `host:port`
    /// - `archive_url` is not an absolute http(s) URL
    /// - `archive_timeout_ms` is 0 or above 120000
    /// - `rate_limit_per_minute` is 0 or above 60000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.app_env != "development" && self.app_env != "production" {
            anyhow::bail!(
                "APP_ENV must be 'development' or 'production', got '{}'",
                self.app_env
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let url = Url::parse(&self.archive_url)
            .with_context(|| format!("ARCHIVE_URL is not a valid URL: '{}'", self.archive_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "ARCHIVE_URL must start with 'http://' or 'https://', got '{}'",
                self.archive_url
            );
        }

        if self.archive_timeout_ms == 0 || self.archive_timeout_ms > 120_000 {
            anyhow::bail!(
                "ARCHIVE_TIMEOUT_MS must be between 1 and 120000, got {}",
                self.archive_timeout_ms
            );
        }

        if self.rate_limit_per_minute == 0 || self.rate_limit_per_minute > 60_000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_MINUTE must be between 1 and 60000, got {}",
                self.rate_limit_per_minute
            );
        }

        if self.archive_user_agent.trim().is_empty() {
            anyhow::bail!("ARCHIVE_USER_AGENT must not be empty");
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// Settings for the upstream archive client.
    ///
    /// # Errors
    ///
    /// Returns an error if `archive_url` does not parse.
    pub fn archive_settings(&self) -> Result<ArchiveSettings> {
        Ok(ArchiveSettings {
            endpoint: Url::parse(&self.archive_url).context("Invalid ARCHIVE_URL")?,
            timeout: Duration::from_millis(self.archive_timeout_ms),
            user_agent: self.archive_user_agent.clone(),
        })
    }

    /// Settings for the HTTP router.
    pub fn router_settings(&self) -> RouterSettings {
        RouterSettings {
            behind_proxy: self.behind_proxy,
            rate_limit_per_minute: self.rate_limit_per_minute,
            allowed_origins: self.cors_allowed_origins.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Environment: {}", self.app_env);
        tracing::info!("  Archive: {}", self.archive_url);
        tracing::info!("  Archive timeout: {}ms", self.archive_timeout_ms);
        tracing::info!("  Rate limit: {}/min per IP", self.rate_limit_per_minute);
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Default CORS origins for `app_env`.
pub fn default_origins(app_env: &str) -> Vec<String> {
    let origins: &[&str] = if app_env == "production" {
        &PRODUCTION_ORIGINS
    } else {
        &DEVELOPMENT_ORIGINS
    };

    origins.iter().map(|s| s.to_string()).collect()
}

fn parse_origin_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 11] = [
        "LISTEN",
        "PORT",
        "LOG_FORMAT",
        "APP_ENV",
        "CORS_ALLOWED_ORIGINS",
        "ARCHIVE_URL",
        "ARCHIVE_TIMEOUT_MS",
        "ARCHIVE_USER_AGENT",
        "RATE_LIMIT_PER_MINUTE",
        "BEHIND_PROXY",
        "RUST_LOG",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially due to #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3001".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            app_env: "development".to_string(),
            cors_allowed_origins: default_origins("development"),
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            archive_timeout_ms: DEFAULT_ARCHIVE_TIMEOUT_MS,
            archive_user_agent: DEFAULT_USER_AGENT.to_string(),
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
            behind_proxy: false,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.app_env = "staging".to_string();
        assert!(config.validate().is_err());
        config.app_env = "production".to_string();

        config.listen_addr = "3001".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3001".to_string();

        config.archive_url = "ftp://archive.example/TAP/sync".to_string();
        assert!(config.validate().is_err());
        config.archive_url = "not a url".to_string();
        assert!(config.validate().is_err());
        config.archive_url = DEFAULT_ARCHIVE_URL.to_string();

        config.archive_timeout_ms = 0;
        assert!(config.validate().is_err());
        config.archive_timeout_ms = 10_000;

        config.rate_limit_per_minute = 0;
        assert!(config.validate().is_err());
        config.rate_limit_per_minute = 10;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_archive_settings() {
        let settings = valid_config().archive_settings().unwrap();

        assert_eq!(settings.endpoint.as_str(), DEFAULT_ARCHIVE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_parse_origin_list() {
        assert_eq!(
            parse_origin_list(" https://a.example , ,https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3001");
        assert_eq!(config.archive_url, DEFAULT_ARCHIVE_URL);
        assert_eq!(config.archive_timeout_ms, 10_000);
        assert_eq!(config.rate_limit_per_minute, 10);
        assert!(!config.behind_proxy);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://localhost:3001"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_listen_priority_over_port() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "8080");
        }
        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8080");

        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
        }
        assert_eq!(Config::load_listen_addr(), "127.0.0.1:9000");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_production_origins_and_override() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("APP_ENV", "production");
        }
        let config = Config::from_env().unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://astrobc1.github.io", "https://www.astrobc1.github.io"]
        );

        unsafe {
            env::set_var("CORS_ALLOWED_ORIGINS", "https://example.org");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.cors_allowed_origins, vec!["https://example.org"]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_malformed_number_is_an_error() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ARCHIVE_TIMEOUT_MS", "ten seconds");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
