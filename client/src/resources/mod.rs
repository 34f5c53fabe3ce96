//! One method per backend (resource, verb) pair.
//!
//! Methods are thin mappings to an HTTP verb plus a path template; no
//! validation, no retries, no caching. Each call is a single round trip
//! whose outcome comes back unmodified. Paths keep the backend's
//! trailing-slash convention.

mod auth;
mod custom_colors;
mod drawings;
mod sticky_notes;
mod users;
mod view_settings;
mod whiteboards;
