//! Chehum HTTP surface over the search and review-deadline cores.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
