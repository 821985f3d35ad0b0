//! Cookie lookup for `document.cookie`-style strings.
//!
//! Parses with the `cookie` crate into a `CookieJar`, the same way the server
//! builds its jar from the `Cookie` header, so both sides agree on which
//! cookies are present.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::{Cookie, CookieJar};

/// Look up `name` in a `k1=v1; k2=v2` cookie string.
///
/// Values are percent-decoded. Segments that do not parse as `name=value`
/// are skipped, and a repeated name keeps its last value.
#[must_use]
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    let mut jar = CookieJar::new();
    for cookie in Cookie::split_parse_encoded(raw).filter_map(Result::ok) {
        jar.add_original(cookie.into_owned());
    }
    jar.get(name).map(|cookie| cookie.value().to_owned())
}
