//! Route tables for each deployment.

use axum::routing::{get, put};
use axum::Router;

use crate::config::Deployment;
use crate::echo::handlers;

/// Build the route table for a deployment.
pub fn router(deployment: Deployment) -> Router {
    match deployment {
        Deployment::Api => api_routes(),
        Deployment::Path => path_routes(),
    }
}

/// The `/api/...` deployment.
fn api_routes() -> Router {
    Router::new()
        .route(
            "/api/message",
            get(handlers::get_message).post(handlers::post_message),
        )
        .route("/api/header-message", get(handlers::get_header_message))
        .route(
            "/api/message/{id}",
            put(handlers::put_message).delete(handlers::delete_message),
        )
}

/// The path-variable deployment.
fn path_routes() -> Router {
    Router::new().route("/message/{message}", get(handlers::get_path_message))
}
