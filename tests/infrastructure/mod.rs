mod credential_mask_test;
mod tracing_config_test;
