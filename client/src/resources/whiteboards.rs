//! Whiteboard CRUD and the access-grant sub-resource.

use reqwest::Method;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::{AccessRole, Whiteboard, WhiteboardAccess};

impl ApiClient {
    /// `GET /whiteboards/` — boards owned by or shared with the session user.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn list_whiteboards(&self) -> Result<Vec<Whiteboard>, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/whiteboards/"))
            .await
    }

    /// `GET /whiteboards/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn get_whiteboard(&self, id: i64) -> Result<Whiteboard, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, format!("/whiteboards/{id}/")))
            .await
    }

    /// `POST /whiteboards/` — the session user becomes the owner.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn create_whiteboard(&self, name: &str) -> Result<Whiteboard, ApiError> {
        let body = json!({ "name": name });
        self.fetch(ApiRequest::json(Method::POST, "/whiteboards/", body))
            .await
    }

    /// `PATCH /whiteboards/{id}/` — rename; `name` is the only writable field.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn update_whiteboard(&self, id: i64, name: &str) -> Result<Whiteboard, ApiError> {
        let body = json!({ "name": name });
        self.fetch(ApiRequest::json(
            Method::PATCH,
            format!("/whiteboards/{id}/"),
            body,
        ))
        .await
    }

    /// `DELETE /whiteboards/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn delete_whiteboard(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(
            Method::DELETE,
            format!("/whiteboards/{id}/"),
        ))
        .await
    }

    /// `POST /whiteboards/{id}/grant_access/`. Idempotent from the caller's
    /// view: repeating a grant with the same role upserts the same row.
    ///
    /// # Errors
    ///
    /// An unknown username is a 404 [`ApiError::Status`]; only the owner or
    /// an admin grantee may grant (403 otherwise).
    pub async fn grant_access(
        &self,
        whiteboard_id: i64,
        username: &str,
        role: AccessRole,
    ) -> Result<WhiteboardAccess, ApiError> {
        let body = json!({ "username": username, "role": role });
        self.fetch(ApiRequest::json(
            Method::POST,
            format!("/whiteboards/{whiteboard_id}/grant_access/"),
            body,
        ))
        .await
    }

    /// `POST /whiteboards/{id}/remove_access/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn remove_access(&self, whiteboard_id: i64, username: &str) -> Result<(), ApiError> {
        let body = json!({ "username": username });
        self.execute(ApiRequest::json(
            Method::POST,
            format!("/whiteboards/{whiteboard_id}/remove_access/"),
            body,
        ))
        .await
    }
}
