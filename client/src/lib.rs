//! REST client for the Stickyboard backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single point of egress for all backend calls. Every outgoing request
//! passes through a prepare step that relays the session anti-forgery token
//! from the cookie jar into the `X-CSRFToken` header and strips the default
//! JSON content type from multipart uploads so the transport can set its own
//! boundary. Resource methods are thin (verb, path) mappings; outcomes
//! surface to the caller unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried or suppressed here. Transport failures and non-success
//! HTTP statuses both become [`ApiError`] values; interpreting them (error
//! display, redirect-to-login on 401) is the caller's job.

pub mod client;
pub mod error;
pub mod request;
mod resources;
pub mod routes;
pub mod token;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use token::SessionTokenSource;
