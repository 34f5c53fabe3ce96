//! Declarative request descriptions and the pre-dispatch transform pipeline.
//!
//! DESIGN
//! ======
//! A request is data until the client dispatches it, so the per-request
//! mutations the backend contract demands (token relay, multipart
//! content-type fixup) are pure `ApiRequest -> ApiRequest` functions that
//! can be unit-tested without a transport. The pipeline stays open: extra
//! transforms (retry, tracing) slot in behind the built-ins without
//! touching any resource method.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

/// Header the backend checks mutating requests for.
pub const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrftoken");

/// Query escaping matches JS `encodeURIComponent`: everything outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded, so a space becomes
/// `%20` and never `+`.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Request payload variants the backend accepts.
#[derive(Debug)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// A single binary file field; the transport supplies the boundary.
    Multipart {
        field: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

/// An outgoing call before dispatch: verb, path relative to the base
/// address, query pairs, headers, and body.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Body,
}

impl ApiRequest {
    /// A bodyless request carrying the default JSON content type.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers,
            body: Body::Empty,
        }
    }

    /// A JSON-bodied request.
    #[must_use]
    pub fn json(method: Method, path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(method, path);
        request.body = Body::Json(body);
        request
    }

    /// A multipart file upload. The default JSON content type is still
    /// present here; [`prepare`] removes it before dispatch.
    #[must_use]
    pub fn multipart(
        method: Method,
        path: impl Into<String>,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let mut request = Self::new(method, path);
        request.body = Body::Multipart {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
        };
        request
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }
}

/// A single transform in the pre-dispatch pipeline.
pub type Transform = Box<dyn Fn(ApiRequest) -> ApiRequest + Send + Sync>;

/// The built-in prepare step applied to every outgoing request, in order:
/// token relay, then content-type negotiation.
#[must_use]
pub fn prepare(request: ApiRequest, token: Option<&str>) -> ApiRequest {
    negotiate_content_type(attach_csrf_token(request, token))
}

/// Set the anti-forgery header from the session token, when one exists.
/// No token means no header; the backend rejects the request if it needed
/// one. A token that is not a representable header value is skipped the
/// same way.
#[must_use]
pub fn attach_csrf_token(mut request: ApiRequest, token: Option<&str>) -> ApiRequest {
    if let Some(token) = token {
        if let Ok(value) = HeaderValue::from_str(token) {
            request.headers.insert(CSRF_HEADER, value);
        }
    }
    request
}

/// Drop the default JSON content type from multipart uploads so the
/// transport can set the header with its own boundary. Leaving it in place
/// corrupts the upload.
#[must_use]
pub fn negotiate_content_type(mut request: ApiRequest) -> ApiRequest {
    if matches!(request.body, Body::Multipart { .. }) {
        request.headers.remove(CONTENT_TYPE);
    }
    request
}

/// Render query pairs as a percent-encoded query string.
pub(crate) fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_SET),
                utf8_percent_encode(value, QUERY_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
