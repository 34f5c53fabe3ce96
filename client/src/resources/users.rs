//! Account administration and user search.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::{NewUser, User, UserPatch};

impl ApiClient {
    /// `GET /users/` — admin only.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/users/")).await
    }

    /// `GET /users/{id}/` — admin only.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, format!("/users/{id}/")))
            .await
    }

    /// `POST /users/` — admin only.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.fetch(ApiRequest::json(
            Method::POST,
            "/users/",
            serde_json::to_value(user)?,
        ))
        .await
    }

    /// `PATCH /users/{id}/` — admin only, partial update.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<User, ApiError> {
        self.fetch(ApiRequest::json(
            Method::PATCH,
            format!("/users/{id}/"),
            serde_json::to_value(patch)?,
        ))
        .await
    }

    /// `DELETE /users/{id}/` — admin only.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::DELETE, format!("/users/{id}/")))
            .await
    }

    /// `GET /users/search/?q=` — username or email substring match. The
    /// query value is percent-encoded here, spaces as `%20`; the backend
    /// returns an empty list for queries under two characters.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/users/search/").with_query("q", query))
            .await
    }
}
