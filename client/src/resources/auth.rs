//! Session endpoints: CSRF priming, login, logout.

use reqwest::Method;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::{AuthenticatedUser, CsrfToken};

impl ApiClient {
    /// `GET /auth/csrf/`. Primes the anti-forgery cookie; the prepare step
    /// relays it on every later call.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn get_csrf_token(&self) -> Result<CsrfToken, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/auth/csrf/")).await
    }

    /// `POST /auth/login/`. A success response sets the session cookie.
    ///
    /// # Errors
    ///
    /// Invalid credentials come back as a 401 [`ApiError::Status`].
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthenticatedUser, ApiError> {
        let body = json!({ "username": username, "password": password });
        self.fetch(ApiRequest::json(Method::POST, "/auth/login/", body))
            .await
    }

    /// `POST /auth/logout/`. Clears the session server-side.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::POST, "/auth/logout/"))
            .await
    }
}
