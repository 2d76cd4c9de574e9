use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::app::AppState;
use crate::presentation::handlers::metadata_handlers::{self, method_not_allowed};
use crate::presentation::handlers::text_handlers;

#[cfg(test)]
mod tests;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(metadata_handlers::welcome).fallback(method_not_allowed),
        )
        .route(
            "/openapi.json",
            get(metadata_handlers::openapi_document).fallback(method_not_allowed),
        )
        .route(
            "/generate",
            get(text_handlers::generate_tokens).fallback(method_not_allowed),
        )
        .route(
            "/tokenize",
            post(text_handlers::tokenize_text).fallback(method_not_allowed),
        )
        .route(
            "/checksum",
            post(text_handlers::generate_checksum).fallback(method_not_allowed),
        )
        .fallback(metadata_handlers::not_found)
        .with_state(state)
}
