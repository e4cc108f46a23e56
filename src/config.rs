// Run configuration: defaults, optional TOML file, then environment variables.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Used when neither `--config` nor `CONFIG_FILE` is given and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "report.toml";

pub const ENV_URL: &str = "IPF_URL";
pub const ENV_TOKEN: &str = "IPF_TOKEN";
pub const ENV_VERIFY: &str = "IPF_VERIFY";
pub const ENV_API_VERSION: &str = "IPF_API_VERSION";
pub const ENV_SNAPSHOT: &str = "IPF_SNAPSHOT";
pub const ENV_TIMEOUT: &str = "IPF_TIMEOUT";
pub const ENV_REPORT_OUTPUT: &str = "REPORT_OUTPUT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a boolean (true/false, yes/no, on/off, 1/0), got {value:?}")]
    InvalidBool { var: String, value: String },
    #[error("{var}: expected an unsigned integer, got {value:?}")]
    InvalidNumber { var: String, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub verify_tls: bool,
    /// Path segment after `/api/`, e.g. "v7.0".
    pub api_version: String,
    /// Snapshot id, or "$last" / "$prev" / "$lastLocked".
    pub snapshot: String,
    pub timeout_secs: u64,
    /// Rows requested per page when fetching all interfaces.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            verify_tls: false,
            api_version: "v7.0".into(),
            snapshot: "$last".into(),
            timeout_secs: 60,
            page_size: 1000,
        }
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("api_version", &self.api_version)
            .field("snapshot", &self.snapshot)
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_base_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_base_name: "devices_interface_report".into(),
        }
    }
}

impl AppConfig {
    /// Loads the full layered config for a run from the process environment.
    /// `.env` is loaded by the binary before this is called.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(config_path, |k| std::env::var(k).ok())
    }

    /// Same as `load`, with environment variables read through `lookup`.
    /// `config_path` wins over `CONFIG_FILE`.
    pub fn load_with<F>(config_path: Option<&Path>, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(|| lookup("CONFIG_FILE").filter(|v| !v.is_empty()).map(Into::into))
            .or_else(|| {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                p.exists().then(|| p.to_path_buf())
            });

        let mut config = match path {
            Some(p) => {
                let s = std::fs::read_to_string(&p)
                    .with_context(|| format!("reading config file {}", p.display()))?;
                Self::parse_toml(&s)?
            }
            None => Self::default(),
        };
        config.apply_env_with(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a TOML string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config = Self::parse_toml(s)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_toml(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("parsing config TOML")
    }

    /// Overlays environment variables read through `lookup`. Empty values count as unset.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_URL) {
            self.api.base_url = v;
        }
        if let Some(v) = get(ENV_TOKEN) {
            self.api.token = v;
        }
        if let Some(v) = get(ENV_VERIFY) {
            self.api.verify_tls = parse_bool(ENV_VERIFY, &v)?;
        }
        if let Some(v) = get(ENV_API_VERSION) {
            self.api.api_version = v;
        }
        if let Some(v) = get(ENV_SNAPSHOT) {
            self.api.snapshot = v;
        }
        if let Some(v) = get(ENV_TIMEOUT) {
            self.api.timeout_secs =
                v.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: ENV_TIMEOUT.into(),
                        value: v.clone(),
                    })?;
        }
        if let Some(v) = get(ENV_REPORT_OUTPUT) {
            self.report.output_base_name = v;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.api.base_url.is_empty(),
            "api.base_url must be set ({} or config file)",
            ENV_URL
        );
        anyhow::ensure!(
            self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"),
            "api.base_url must start with http:// or https://, got {}",
            self.api.base_url
        );
        anyhow::ensure!(
            !self.api.token.is_empty(),
            "api.token must be set ({} or config file)",
            ENV_TOKEN
        );
        anyhow::ensure!(
            !self.api.api_version.is_empty(),
            "api.api_version must be non-empty"
        );
        anyhow::ensure!(!self.api.snapshot.is_empty(), "api.snapshot must be non-empty");
        anyhow::ensure!(
            self.api.timeout_secs > 0,
            "api.timeout_secs must be > 0, got {}",
            self.api.timeout_secs
        );
        anyhow::ensure!(
            self.api.page_size > 0,
            "api.page_size must be > 0, got {}",
            self.api.page_size
        );
        anyhow::ensure!(
            !self.report.output_base_name.is_empty(),
            "report.output_base_name must be non-empty"
        );
        Ok(())
    }
}

/// Strict boolean parsing for environment values. Trimmed, ASCII case-insensitive.
pub fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Ok(true),
        "false" | "0" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
