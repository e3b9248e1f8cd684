use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;

/// All route wiring for the application: the health probe plus the static
/// frontend bundle as fallback.
pub fn configure_routes(dist_dir: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .fallback_service(ServeDir::new(dist_dir))
}
