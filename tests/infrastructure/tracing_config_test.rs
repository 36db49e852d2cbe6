use ausis_batch::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert_eq!(config.default_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn given_custom_filter_when_applied_then_replaces_default() {
    let config = TracingConfig::default().with_filter("warn");
    assert_eq!(config.default_filter, "warn");
}
