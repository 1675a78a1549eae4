use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TULIP_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8081");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.lexicon_path.is_none());
    assert_eq!(cfg.max_text_chars, 5000);
    assert_eq!(cfg.max_batch_texts, 500);
    assert_eq!(cfg.default_top_n, 3);
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("TULIP_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TULIP_BIND_ADDR"),
        "expected InvalidEnvVar(TULIP_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_lexicon_path() {
    let mut map = HashMap::new();
    map.insert("TULIP_LEXICON_PATH", "/etc/tulip/lexicon.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.lexicon_path.as_deref(),
        Some(std::path::Path::new("/etc/tulip/lexicon.yaml"))
    );
}

#[test]
fn build_app_config_ignores_blank_lexicon_path() {
    let mut map = HashMap::new();
    map.insert("TULIP_LEXICON_PATH", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.lexicon_path.is_none());
}

#[test]
fn build_app_config_max_text_chars_override() {
    let mut map = HashMap::new();
    map.insert("TULIP_MAX_TEXT_CHARS", "280");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_text_chars, 280);
}

#[test]
fn build_app_config_max_text_chars_invalid() {
    let mut map = HashMap::new();
    map.insert("TULIP_MAX_TEXT_CHARS", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TULIP_MAX_TEXT_CHARS"),
        "expected InvalidEnvVar(TULIP_MAX_TEXT_CHARS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_batch_size() {
    let mut map = HashMap::new();
    map.insert("TULIP_MAX_BATCH_TEXTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TULIP_MAX_BATCH_TEXTS"),
        "expected InvalidEnvVar(TULIP_MAX_BATCH_TEXTS), got: {result:?}"
    );
}

#[test]
fn build_app_config_default_top_n_override() {
    let mut map = HashMap::new();
    map.insert("TULIP_DEFAULT_TOP_N", "10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_top_n, 10);
}

#[test]
fn build_app_config_rate_limit_overrides() {
    let mut map = HashMap::new();
    map.insert("TULIP_RATE_LIMIT_MAX_REQUESTS", "10");
    map.insert("TULIP_RATE_LIMIT_WINDOW_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rate_limit_max_requests, 10);
    assert_eq!(cfg.rate_limit_window_secs, 5);
}

#[test]
fn build_app_config_rate_limit_window_invalid() {
    let mut map = HashMap::new();
    map.insert("TULIP_RATE_LIMIT_WINDOW_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TULIP_RATE_LIMIT_WINDOW_SECS"),
        "expected InvalidEnvVar(TULIP_RATE_LIMIT_WINDOW_SECS), got: {result:?}"
    );
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(Environment::Development.to_string(), "development");
}
