mod settings;

pub use settings::{
    ArtifactSettings, CleanupEndpointSetting, DEFAULT_CONFIG_FILE, DispatchSettings, ENV_PREFIX,
    LoggingSettings, RateLimitSettings, ServiceSettings, Settings,
};
