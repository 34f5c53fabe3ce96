//! Named UI routes consumed by the front-end router.
//!
//! The router owns navigation; this table is the only UI-facing surface of
//! the crate. `:id` is an opaque resource identifier passed through
//! unvalidated.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A named route: view name and path pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
}

/// The application's route table: login at the root, the whiteboard list,
/// and a single whiteboard.
pub const ROUTES: [Route; 3] = [
    Route {
        name: "login",
        path: "/",
    },
    Route {
        name: "whiteboards",
        path: "/whiteboards",
    },
    Route {
        name: "whiteboard",
        path: "/whiteboard/:id",
    },
];

/// Look up a route by name.
#[must_use]
pub fn route(name: &str) -> Option<Route> {
    ROUTES.iter().copied().find(|route| route.name == name)
}

/// Concrete path for a single whiteboard.
#[must_use]
pub fn whiteboard_path(id: i64) -> String {
    format!("/whiteboard/{id}")
}
