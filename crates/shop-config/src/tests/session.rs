use crate::SessionConfig;

#[test]
fn test_default_session_config_is_valid() {
    let config = SessionConfig::default();
    assert_eq!(config.storage_key, "user");
    assert!(config.validate().is_ok());
}

#[test]
fn test_storage_key_with_separator_rejected() {
    let config = SessionConfig {
        storage_key: "a/b".to_string(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_storage_key_rejected() {
    let config = SessionConfig {
        storage_key: String::new(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_absolute_session_dir_rejected() {
    let config = SessionConfig {
        dir: "/tmp/session".to_string(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
