//! Per-whiteboard view settings: zoom and pan, one record per
//! (user, whiteboard). Read keys by query parameter, write by body; the
//! view must read these before its first render, so callers await the read
//! ahead of drawing.

use reqwest::Method;
use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::ViewSettings;

impl ApiClient {
    /// `GET /view-settings/for_whiteboard/?whiteboard_id=`.
    ///
    /// # Errors
    ///
    /// A board the user has never opened is a 404 [`ApiError::Status`].
    pub async fn get_view_settings(&self, whiteboard_id: i64) -> Result<ViewSettings, ApiError> {
        self.fetch(
            ApiRequest::new(Method::GET, "/view-settings/for_whiteboard/")
                .with_query("whiteboard_id", &whiteboard_id.to_string()),
        )
        .await
    }

    /// `POST /view-settings/for_whiteboard/` — upserts the record.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn save_view_settings(
        &self,
        whiteboard_id: i64,
        zoom: f64,
        pan_x: f64,
        pan_y: f64,
    ) -> Result<ViewSettings, ApiError> {
        let body = json!({
            "whiteboard": whiteboard_id,
            "zoom": zoom,
            "pan_x": pan_x,
            "pan_y": pan_y,
        });
        self.fetch(ApiRequest::json(
            Method::POST,
            "/view-settings/for_whiteboard/",
            body,
        ))
        .await
    }
}
