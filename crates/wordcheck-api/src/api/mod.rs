//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_lookup, health_check, method_not_allowed, post_lookup, preflight};
pub use routes::{LEGACY_LOOKUP_PATH, LOOKUP_PATH, create_router, run_server};
pub use state::AppState;
