use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;
use serde_json::Value;

use crate::app::AppState;
use crate::application::dto::metadata_dto::WelcomeResponseDto;
use crate::presentation::errors::ApiError;
use crate::presentation::handlers::helpers::log_request;

pub async fn welcome(State(app_state): State<Arc<AppState>>) -> Json<WelcomeResponseDto> {
    log_request("GET /");

    Json(app_state.metadata_service.welcome())
}

pub async fn openapi_document(State(app_state): State<Arc<AppState>>) -> Json<Value> {
    log_request("GET /openapi.json");

    Json(app_state.metadata_service.openapi_document())
}

pub async fn not_found(uri: Uri) -> ApiError {
    log_request(format!("unmatched {}", uri.path()));

    ApiError::NotFound("Not Found".to_string())
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    log_request(format!("unsupported {} {}", method, uri.path()));

    ApiError::MethodNotAllowed("Method Not Allowed".to_string())
}
