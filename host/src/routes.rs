//! Router assembly: exact-match static assets with SPA fallback.
//!
//! REQUEST DISPATCH
//! ================
//! {arrived} -> static file hit: respond bytes
//!           -> `/api/`-prefixed miss: 404, no document
//!           -> anything else: entry document, so the front-end router
//!              owns deep links and reloads.
//!
//! API traffic belongs to a different origin entirely (the REST client is
//! configured with an absolute base address); this host never proxies it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Reserved prefix for backend API traffic.
const API_PREFIX: &str = "/api/";

#[derive(Clone)]
struct HostState {
    entry: Arc<PathBuf>,
}

/// Asset bundle directory, from `ASSET_DIR` (default `dist`).
#[must_use]
pub fn asset_dir() -> PathBuf {
    std::env::var("ASSET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("dist"))
}

/// Build the router over a prebuilt asset bundle.
#[must_use]
pub fn app(assets: &Path) -> Router {
    let state = HostState {
        entry: Arc::new(assets.join("index.html")),
    };
    let fallback = any(spa_fallback).with_state(state);
    Router::new()
        .fallback_service(ServeDir::new(assets).fallback(fallback))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn is_api_path(path: &str) -> bool {
    path.starts_with(API_PREFIX)
}

/// Handles every request `ServeDir` found no file for.
async fn spa_fallback(State(state): State<HostState>, uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    match tokio::fs::read(state.entry.as_ref()).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, entry = %state.entry.display(), "entry document unreadable");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
