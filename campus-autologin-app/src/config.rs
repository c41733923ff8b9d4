//! Application configuration (`config.toml`).
//!
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use campus_autologin_core::error::{CoreError, CoreResult};
use campus_autologin_core::ControllerTimings;
use serde::{Deserialize, Serialize};

/// Directory name used under the platform config / data directories
pub const APP_DIR_NAME: &str = "campus-autologin";

const CONFIG_FILE_NAME: &str = "config.toml";
const SETTINGS_FILE_NAME: &str = "data.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Override for the settings JSON path
    pub settings_file: Option<PathBuf>,
    pub timings: TimingsConfig,
    pub probe: ProbeConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    pub quiet_period_ms: u64,
    pub toast_ttl_ms: u64,
    pub result_detail_ttl_ms: u64,
    pub status_detail_ttl_ms: u64,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: 500,
            toast_ttl_ms: 5000,
            result_detail_ttl_ms: 5000,
            status_detail_ttl_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Site that is only reachable once authenticated
    pub connectivity_url: String,
    /// Page title fragment proving the connectivity site was really reached
    pub connectivity_title: String,
    /// Entry points tried in order when looking for the login page
    pub probe_urls: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connectivity_url: "http://www.baidu.com".to_string(),
            connectivity_title: "百度".to_string(),
            probe_urls: [
                "http://www.baidu.com",
                "http://www.google.com",
                "http://www.yzu.edu.cn",
                "http://10.10.10.10",
                "http://1.1.1.1",
                "http://captive.apple.com",
                "http://connectivitycheck.gstatic.com",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub level: String,
    /// Defaults to the data directory
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl AppConfig {
    /// `<config dir>/campus-autologin/config.toml`
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the default location.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::ValidationError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };
        toml::from_str(&content).map_err(|e| {
            CoreError::ValidationError(format!("Invalid config {}: {e}", path.display()))
        })
    }

    /// `<data dir>/campus-autologin`
    #[must_use]
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(SETTINGS_FILE_NAME))
    }

    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.log
            .directory
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("logs"))
    }

    #[must_use]
    pub fn controller_timings(&self) -> ControllerTimings {
        ControllerTimings {
            quiet_period: Duration::from_millis(self.timings.quiet_period_ms),
            result_detail_ttl: Duration::from_millis(self.timings.result_detail_ttl_ms),
            status_detail_ttl: Duration::from_millis(self.timings.status_detail_ttl_ms),
        }
    }

    #[must_use]
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.timings.toast_ttl_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.probe.request_timeout_secs)
    }
}
