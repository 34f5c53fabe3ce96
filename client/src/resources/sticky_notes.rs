//! Sticky-note CRUD and image attachment.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::types::{NewStickyNote, StickyNote, StickyNoteImage, StickyNotePatch};

impl ApiClient {
    /// `GET /sticky-notes/` — notes on every board the session user can see.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn list_sticky_notes(&self) -> Result<Vec<StickyNote>, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/sticky-notes/"))
            .await
    }

    /// `GET /sticky-notes/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn get_sticky_note(&self, id: i64) -> Result<StickyNote, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, format!("/sticky-notes/{id}/")))
            .await
    }

    /// `POST /sticky-notes/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn create_sticky_note(&self, note: &NewStickyNote) -> Result<StickyNote, ApiError> {
        self.fetch(ApiRequest::json(
            Method::POST,
            "/sticky-notes/",
            serde_json::to_value(note)?,
        ))
        .await
    }

    /// `PATCH /sticky-notes/{id}/` — partial update.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn update_sticky_note(
        &self,
        id: i64,
        patch: &StickyNotePatch,
    ) -> Result<StickyNote, ApiError> {
        self.fetch(ApiRequest::json(
            Method::PATCH,
            format!("/sticky-notes/{id}/"),
            serde_json::to_value(patch)?,
        ))
        .await
    }

    /// `DELETE /sticky-notes/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn delete_sticky_note(&self, id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(
            Method::DELETE,
            format!("/sticky-notes/{id}/"),
        ))
        .await
    }

    /// `POST /sticky-notes/{id}/add_image/` — multipart upload of a single
    /// binary field named `image`. The prepare step strips the JSON content
    /// type so the transport sets the boundary.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn add_image_to_note(
        &self,
        note_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StickyNoteImage, ApiError> {
        self.fetch(ApiRequest::multipart(
            Method::POST,
            format!("/sticky-notes/{note_id}/add_image/"),
            "image",
            file_name,
            bytes,
        ))
        .await
    }

    /// `DELETE /sticky-note-images/{id}/`.
    ///
    /// # Errors
    ///
    /// Surfaces the transport or HTTP failure unchanged.
    pub async fn delete_note_image(&self, image_id: i64) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(
            Method::DELETE,
            format!("/sticky-note-images/{image_id}/"),
        ))
        .await
    }
}
