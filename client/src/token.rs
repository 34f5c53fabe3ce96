//! Session-token capability: where the anti-forgery token comes from.
//!
//! DESIGN
//! ======
//! The cookie-to-header relay is an ambient-state read, so it hides behind
//! a trait injected into the client. Production reads the shared reqwest
//! cookie jar; tests substitute a fixed source and never touch a jar.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::Arc;

use percent_encoding::percent_decode_str;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

/// Cookie the backend stores the anti-forgery token under.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Supplies the current anti-forgery token, if any.
pub trait SessionTokenSource: Send + Sync {
    fn current_token(&self) -> Option<String>;
}

/// Reads the `csrftoken` cookie for the base address from the cookie jar
/// shared with the HTTP client, percent-decoding its value. The jar itself
/// is owned by the transport; login and logout responses mutate it, this
/// source only ever reads.
pub struct CookieTokenSource {
    jar: Arc<Jar>,
    base: Url,
}

impl CookieTokenSource {
    #[must_use]
    pub fn new(jar: Arc<Jar>, base: Url) -> Self {
        Self { jar, base }
    }
}

impl SessionTokenSource for CookieTokenSource {
    fn current_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base)?;
        let raw = header.to_str().ok()?;
        cookie_value(raw, CSRF_COOKIE).map(|value| decode_cookie_value(&value))
    }
}

/// Extract a cookie's raw value from a `name=value; ...` cookie header.
pub(crate) fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Percent-decode a cookie value; a value that does not decode to UTF-8 is
/// passed through raw.
pub(crate) fn decode_cookie_value(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned())
}
