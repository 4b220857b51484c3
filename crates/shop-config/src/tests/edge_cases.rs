use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_storage_key_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::set("SHOP_SESSION_STORAGE_KEY", "../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("storage_key"));
}

#[test]
#[serial]
fn given_non_http_base_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("SHOP_API_BASE_URL", "ftp://shop.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_invalid_log_level_env_when_load_then_uses_default_level() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("SHOP_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(crate::DEFAULT_LOG_LEVEL));
}

#[test]
#[serial]
fn given_unknown_toml_section_when_load_then_ignored() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[theme]\ncolor = \"red\"\n\n[api]\nbase_url = \"http://a.example\"",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "http://a.example");
}
