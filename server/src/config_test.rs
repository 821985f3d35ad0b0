use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = AppConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.blog_api.base_url, DEFAULT_BLOG_API_BASE_URL);
    assert_eq!(cfg.blog_api.request_timeout_secs, DEFAULT_BLOG_API_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.blog_api.connect_timeout_secs, DEFAULT_BLOG_API_CONNECT_TIMEOUT_SECS);
}

#[test]
fn parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BLOG_API_BASE_URL", "https://example.test/api/"),
        ("BLOG_API_REQUEST_TIMEOUT_SECS", "42"),
        ("BLOG_API_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.blog_api.base_url, "https://example.test/api");
    assert_eq!(cfg.blog_api.request_timeout_secs, 42);
    assert_eq!(cfg.blog_api.connect_timeout_secs, 7);
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("BLOG_API_BASE_URL", "   ")])).unwrap();
    assert_eq!(cfg.blog_api.base_url, DEFAULT_BLOG_API_BASE_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_timeout_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("BLOG_API_REQUEST_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for BLOG_API_REQUEST_TIMEOUT_SECS: \"-1\"");
}
