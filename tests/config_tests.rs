use droplet_tray::config::{self, Config, ConfigError, Settings};
use std::env;
use std::fs;
use std::time::Duration;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.digitalocean.com/"),
        "https://api.digitalocean.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://api.digitalocean.com///"),
        "https://api.digitalocean.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  http://127.0.0.1:8080/  "),
        "http://127.0.0.1:8080"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_load_reads_personal_access_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "PersonalAccessToken": "dop_v1_abc", "Ignored": 1 }"#).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.personal_access_token, "dop_v1_abc");
}

#[test]
fn test_load_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("config.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Open { .. }));
    assert!(err.to_string().starts_with("could not open"));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("could not parse"));
}

#[test]
fn test_load_missing_token_field_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "Token": "x" }"#).unwrap();

    assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_clamp_per_page() {
    assert_eq!(config::clamp_per_page(0), 1);
    assert_eq!(config::clamp_per_page(50), 50);
    assert_eq!(config::clamp_per_page(500), 200);
}

#[test]
fn test_overrides_win_over_settings() {
    let settings = Settings::default().with_overrides(Some("http://localhost:9000/"), Some(3), Some(999));
    assert_eq!(settings.api_base_url, "http://localhost:9000");
    assert_eq!(settings.page_timeout, Duration::from_secs(3));
    assert_eq!(settings.per_page, 200);
}

#[test]
fn test_zero_timeout_override_is_ignored() {
    let settings = Settings::default().with_overrides(None, Some(0), None);
    assert_eq!(settings, Settings::default());
}

// Environment variables are process-wide, so every env case lives in one test.
#[test]
fn test_settings_from_env() {
    env::remove_var("DO_API_BASE_URL");
    env::remove_var("DO_PAGE_TIMEOUT_SECS");
    env::remove_var("DO_PER_PAGE");
    assert_eq!(Settings::from_env(), Settings::default());

    env::set_var("DO_API_BASE_URL", "https://api.example.test/");
    env::set_var("DO_PAGE_TIMEOUT_SECS", "25");
    env::set_var("DO_PER_PAGE", "50");
    let settings = Settings::from_env();
    assert_eq!(settings.api_base_url, "https://api.example.test");
    assert_eq!(settings.page_timeout, Duration::from_secs(25));
    assert_eq!(settings.per_page, 50);

    env::set_var("DO_PAGE_TIMEOUT_SECS", "soon");
    env::set_var("DO_PER_PAGE", "0");
    let settings = Settings::from_env();
    assert_eq!(settings.page_timeout, Duration::from_secs(config::DEFAULT_PAGE_TIMEOUT_SECS));
    assert_eq!(settings.per_page, 1);

    // Clean up
    env::remove_var("DO_API_BASE_URL");
    env::remove_var("DO_PAGE_TIMEOUT_SECS");
    env::remove_var("DO_PER_PAGE");
}
