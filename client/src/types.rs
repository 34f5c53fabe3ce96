//! Wire DTOs mirroring the backend's serialized resources.
//!
//! The backend owns schema and lifecycle; these types only need to
//! round-trip its JSON losslessly. Identifiers are integral primary keys
//! and timestamps stay ISO-8601 strings, both passed through opaquely.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user as embedded in resource payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Access level on a shared whiteboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRole {
    View,
    Edit,
    Admin,
}

impl AccessRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Admin => "admin",
        }
    }
}

/// One user's grant on a whiteboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhiteboardAccess {
    pub id: i64,
    pub user: User,
    pub role: AccessRole,
    pub created_at: String,
}

/// A sticky note placed on a whiteboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: i64,
    /// Owning whiteboard id.
    pub whiteboard: i64,
    pub content: String,
    /// URL of the attached image, if one was uploaded.
    pub image: Option<String>,
    pub link: Option<String>,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub group_id: Option<String>,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i32,
    pub created_by: User,
    pub created_at: String,
    pub updated_at: String,
}

/// An image attached to a sticky note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickyNoteImage {
    pub id: i64,
    /// URL of the stored image.
    pub image: String,
}

/// A freehand stroke on a whiteboard, stored as SVG path data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: i64,
    pub whiteboard: i64,
    pub path_data: String,
    pub color: String,
    pub stroke_width: f64,
    pub created_by: User,
    pub created_at: String,
}

/// A whiteboard with its nested notes, drawings, and grants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Whiteboard {
    pub id: i64,
    pub name: String,
    pub owner: User,
    pub sticky_notes: Vec<StickyNote>,
    pub drawings: Vec<Drawing>,
    pub access_rights: Vec<WhiteboardAccess>,
    pub created_at: String,
    pub updated_at: String,
}

/// User-scoped palette entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    pub id: i64,
    pub color: String,
}

/// Zoom and pan for one (user, whiteboard) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub whiteboard: i64,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

/// Login response: the authenticated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
}

/// Response of the CSRF priming endpoint. The interesting side effect is
/// the cookie it sets; the body merely echoes the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrfToken {
    pub message: String,
    pub csrftoken: String,
}

/// Creation payload for a sticky note.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewStickyNote {
    pub whiteboard: i64,
    pub content: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// Partial update for a sticky note; unset fields are left untouched by
/// the backend.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StickyNotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// Creation payload for a drawing.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewDrawing {
    pub whiteboard: i64,
    pub path_data: String,
    pub color: String,
    pub stroke_width: f64,
}

/// Partial update for a drawing's stroke styling.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DrawingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Creation payload for an admin-managed account.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Partial update for an account.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
