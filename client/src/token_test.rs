use std::sync::Arc;

use reqwest::Url;
use reqwest::cookie::Jar;

use super::*;

#[test]
fn cookie_value_finds_named_cookie_among_many() {
    let header = "sessionid=s3ss10n; csrftoken=tok123; theme=dark";
    assert_eq!(cookie_value(header, CSRF_COOKIE), Some("tok123".to_owned()));
}

#[test]
fn cookie_value_returns_none_when_absent() {
    assert_eq!(cookie_value("sessionid=s3ss10n", CSRF_COOKIE), None);
    assert_eq!(cookie_value("", CSRF_COOKIE), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    assert_eq!(cookie_value("csrftoken_old=stale", CSRF_COOKIE), None);
}

#[test]
fn cookie_value_keeps_embedded_equals_signs() {
    assert_eq!(
        cookie_value("csrftoken=a=b=c", CSRF_COOKIE),
        Some("a=b=c".to_owned())
    );
}

#[test]
fn decode_cookie_value_percent_decodes() {
    assert_eq!(decode_cookie_value("tok%3Aalpha%20beta"), "tok:alpha beta");
}

#[test]
fn decode_cookie_value_passes_plain_values_through() {
    assert_eq!(decode_cookie_value("tok123"), "tok123");
}

#[test]
fn decode_cookie_value_falls_back_on_invalid_utf8() {
    assert_eq!(decode_cookie_value("%FF%FE"), "%FF%FE");
}

#[test]
fn jar_backed_source_reads_and_decodes_the_csrf_cookie() {
    let base = Url::parse("http://localhost:8000/api").unwrap();
    let jar = Arc::new(Jar::default());
    jar.add_cookie_str("csrftoken=tok%20x; Path=/", &base);

    let source = CookieTokenSource::new(jar, base);
    assert_eq!(source.current_token(), Some("tok x".to_owned()));
}

#[test]
fn jar_without_csrf_cookie_yields_none() {
    let base = Url::parse("http://localhost:8000/api").unwrap();
    let jar = Arc::new(Jar::default());
    jar.add_cookie_str("sessionid=s3ss10n; Path=/", &base);

    let source = CookieTokenSource::new(jar, base);
    assert_eq!(source.current_token(), None);
}
