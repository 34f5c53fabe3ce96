//! Freehand drawing endpoints. The UI adds and removes whole strokes;
//! patching only restyles an existing one.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::{Drawing, DrawingPatch, NewDrawing};

impl ApiClient {
    /// `GET /drawings/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn list_drawings(&self) -> Result<Vec<Drawing>, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/drawings/")).await
    }

    /// `POST /drawings/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn create_drawing(&self, drawing: &NewDrawing) -> Result<Drawing, ApiError> {
        self.fetch(ApiRequest::json(
            Method::POST,
            "/drawings/",
            serde_json::to_value(drawing)?,
        ))
        .await
    }

    /// `GET /drawings/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn get_drawing(&self, id: i64) -> Result<Drawing, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, format!("/drawings/{id}/")))
            .await
    }

    /// `PATCH /drawings/{id}/` — partial update of stroke styling.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn update_drawing(&self, id: i64, patch: &DrawingPatch) -> Result<Drawing, ApiError> {
        self.fetch(ApiRequest::json(
            Method::PATCH,
            format!("/drawings/{id}/"),
            serde_json::to_value(patch)?,
        ))
        .await
    }

    /// `DELETE /drawings/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn delete_drawing(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::DELETE, format!("/drawings/{id}/")))
            .await
    }
}
