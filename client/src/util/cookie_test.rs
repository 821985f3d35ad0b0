use super::*;

#[test]
fn finds_value_among_several_cookies() {
    let raw = "theme=dark; jwt_token=abc123; lang=en";
    assert_eq!(cookie_value(raw, "jwt_token").as_deref(), Some("abc123"));
}

#[test]
fn missing_cookie_is_none() {
    assert_eq!(cookie_value("theme=dark; lang=en", "jwt_token"), None);
    assert_eq!(cookie_value("", "jwt_token"), None);
}

#[test]
fn does_not_match_on_prefix() {
    assert_eq!(cookie_value("jwt_token_old=x", "jwt_token"), None);
    assert_eq!(cookie_value("my_jwt_token=x", "jwt_token"), None);
}

#[test]
fn empty_value_is_present() {
    assert_eq!(cookie_value("jwt_token=; a=b", "jwt_token").as_deref(), Some(""));
}

#[test]
fn bare_name_without_value_is_absent() {
    assert_eq!(cookie_value("jwt_token; theme=dark", "jwt_token"), None);
    assert_eq!(cookie_value("jwt_token; theme=dark", "theme").as_deref(), Some("dark"));
}

#[test]
fn value_is_percent_decoded() {
    assert_eq!(cookie_value("jwt_token=a%20b", "jwt_token").as_deref(), Some("a b"));
}

#[test]
fn repeated_name_keeps_last_value() {
    assert_eq!(cookie_value("jwt_token=one; jwt_token=two", "jwt_token").as_deref(), Some("two"));
}
