//! Client core: configuration, transform pipeline, dispatch.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::request::{ApiRequest, Body, Transform, encode_query, prepare};
use crate::token::{CookieTokenSource, SessionTokenSource};

/// Configured HTTP client for the backend REST API.
///
/// Constructed once per process with a fixed base address. The cookie jar
/// is attached to the transport, so session cookies travel with every
/// request; the same jar backs the default [`SessionTokenSource`].
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    tokens: Arc<dyn SessionTokenSource>,
    transforms: Vec<Transform>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .field("transforms", &self.transforms.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client against a base address such as
    /// `http://localhost:8000/api`.
    ///
    /// # Errors
    ///
    /// Fails if the base address does not parse or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_owned()))?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        let tokens: Arc<dyn SessionTokenSource> =
            Arc::new(CookieTokenSource::new(jar, base.clone()));
        Ok(Self {
            http,
            base,
            tokens,
            transforms: Vec::new(),
        })
    }

    /// Replace the token source. Keeps the client testable without a real
    /// cookie jar.
    #[must_use]
    pub fn with_token_source(mut self, tokens: Arc<dyn SessionTokenSource>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Append a transform to the pre-dispatch pipeline. Transforms run
    /// after the built-in prepare step, in insertion order.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Apply the prepare step and the transform pipeline to a request.
    pub(crate) fn transformed(&self, request: ApiRequest) -> ApiRequest {
        let request = prepare(request, self.tokens.current_token().as_deref());
        self.transforms
            .iter()
            .fold(request, |request, transform| transform(request))
    }

    fn endpoint(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let joined = format!(
            "{}{}",
            self.base.as_str().trim_end_matches('/'),
            request.path
        );
        let mut url = Url::parse(&joined).map_err(|_| ApiError::InvalidBaseUrl(joined))?;
        if !request.query.is_empty() {
            url.set_query(Some(&encode_query(&request.query)));
        }
        Ok(url)
    }

    /// One round trip: transform, resolve, send. Non-success statuses are
    /// surfaced as [`ApiError::Status`] with the body carried verbatim; no
    /// retry, no timeout policy, no caching.
    pub(crate) async fn dispatch(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let request = self.transformed(request);
        let url = self.endpoint(&request)?;
        tracing::debug!(method = %request.method, %url, "dispatching request");

        let ApiRequest {
            method,
            headers,
            body,
            ..
        } = request;
        let builder = self.http.request(method, url).headers(headers);
        let builder = match body {
            Body::Empty => builder,
            Body::Json(value) => builder.body(serde_json::to_vec(&value)?),
            Body::Multipart {
                field,
                file_name,
                bytes,
            } => {
                let part = Part::bytes(bytes).file_name(file_name);
                builder.multipart(Form::new().part(field, part))
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response)
    }

    /// Dispatch and decode a JSON response body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// Dispatch, discarding the response body (deletes and the like).
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.dispatch(request).await?;
        Ok(())
    }
}
