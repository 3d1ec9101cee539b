use crate::Config;
use crate::tests::{setup_config_dir, write_config_file};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config_file(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_wrong_type_in_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config_file(
        &temp,
        r#"
            [server]
            port = "eight thousand"
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_section_in_toml_when_load_then_ignored() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config_file(
        &temp,
        r#"
            [metrics]
            enabled = true

            [server]
            port = 9200
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9200));
}

#[test]
#[serial]
fn given_zero_rate_limit_in_toml_when_validate_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config_file(
        &temp,
        r#"
            [rate_limit]
            max_requests = 0
        "#,
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
