use ausis_batch::infrastructure::observability::mask_credential;

#[test]
fn given_long_key_when_masking_then_only_prefix_is_visible() {
    let masked = mask_credential("abcd1234efgh5678");

    assert!(masked.starts_with("abcd..."));
    assert!(!masked.contains("5678"));
    assert!(masked.contains("16 chars"));
}

#[test]
fn given_short_key_when_masking_then_fully_redacted() {
    assert_eq!(mask_credential("secret"), "[REDACTED]");
}

#[test]
fn given_empty_key_when_masking_then_reports_none() {
    assert_eq!(mask_credential("   "), "[NONE]");
}
