use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_POLL_INTERVAL, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKER_COUNT,
};
use crate::domain::ArtifactNames;
use crate::infrastructure::observability::DEFAULT_LOG_FILTER;
use crate::infrastructure::remote::{
    AusisClientConfig, CleanupEndpoint, DEFAULT_BASE_URL, DEFAULT_MAX_DELAY, DEFAULT_MAX_REQUESTS,
    DEFAULT_RECOGNIZER, DEFAULT_REQUEST_TIMEOUT, DEFAULT_UPLOAD_TIMEOUT, DEFAULT_WINDOW,
    RateLimiter,
};

pub const DEFAULT_CONFIG_FILE: &str = "ausis-batch.toml";
pub const ENV_PREFIX: &str = "AUSIS";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service: ServiceSettings,
    pub dispatch: DispatchSettings,
    pub rate_limit: RateLimitSettings,
    pub artifacts: ArtifactSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers an optional TOML file and `AUSIS_*` environment variables over the defaults.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub recognizer: String,
    pub speakers: Option<u32>,
    pub cleanup: CleanupEndpointSetting,
    pub upload_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            recognizer: DEFAULT_RECOGNIZER.to_string(),
            speakers: None,
            cleanup: CleanupEndpointSetting::Current,
            upload_timeout_secs: DEFAULT_UPLOAD_TIMEOUT.as_secs(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl ServiceSettings {
    pub fn client_config(&self) -> AusisClientConfig {
        AusisClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            recognizer: self.recognizer.clone(),
            speakers: self.speakers,
            cleanup: self.cleanup.into(),
            upload_timeout: Duration::from_secs(self.upload_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupEndpointSetting {
    Current,
    Legacy,
}

impl From<CleanupEndpointSetting> for CleanupEndpoint {
    fn from(setting: CleanupEndpointSetting) -> Self {
        match setting {
            CleanupEndpointSetting::Current => CleanupEndpoint::Current,
            CleanupEndpointSetting::Legacy => CleanupEndpoint::Legacy,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    pub workers: usize,
    pub queue_capacity: usize,
    pub poll_interval_ms: u64,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKER_COUNT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl DispatchSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    pub max_requests: usize,
    pub window_ms: u64,
    pub max_delay_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window_ms: DEFAULT_WINDOW.as_millis() as u64,
            max_delay_secs: DEFAULT_MAX_DELAY.as_secs(),
        }
    }
}

impl RateLimitSettings {
    pub fn limiter(&self) -> RateLimiter {
        RateLimiter::new(
            self.max_requests,
            Duration::from_millis(self.window_ms),
            Duration::from_secs(self.max_delay_secs),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtifactSettings {
    pub primary: String,
    pub restored: String,
    pub fetch_restored: bool,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        let names = ArtifactNames::default();
        Self {
            primary: names.primary,
            restored: names.restored,
            fetch_restored: true,
        }
    }
}

impl ArtifactSettings {
    pub fn names(&self) -> ArtifactNames {
        ArtifactNames {
            primary: self.primary.clone(),
            restored: self.restored.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}
