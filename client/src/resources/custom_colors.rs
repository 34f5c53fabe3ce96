//! User-scoped palette entries.

use reqwest::Method;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::CustomColor;

impl ApiClient {
    /// `GET /custom-colors/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn list_custom_colors(&self) -> Result<Vec<CustomColor>, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/custom-colors/"))
            .await
    }

    /// `GET /custom-colors/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn get_custom_color(&self, id: i64) -> Result<CustomColor, ApiError> {
        self.fetch(ApiRequest::new(
            Method::GET,
            format!("/custom-colors/{id}/"),
        ))
        .await
    }

    /// `POST /custom-colors/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn create_custom_color(&self, color: &str) -> Result<CustomColor, ApiError> {
        let body = json!({ "color": color });
        self.fetch(ApiRequest::json(Method::POST, "/custom-colors/", body))
            .await
    }

    /// `PATCH /custom-colors/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn update_custom_color(&self, id: i64, color: &str) -> Result<CustomColor, ApiError> {
        let body = json!({ "color": color });
        self.fetch(ApiRequest::json(
            Method::PATCH,
            format!("/custom-colors/{id}/"),
            body,
        ))
        .await
    }

    /// `DELETE /custom-colors/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn delete_custom_color(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(
            Method::DELETE,
            format!("/custom-colors/{id}/"),
        ))
        .await
    }
}
