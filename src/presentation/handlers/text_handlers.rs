use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::application::dto::text_dto::{
    ChecksumResponseDto, GenerateQueryDto, TextInputDto, TokenResponseDto,
};
use crate::presentation::errors::ApiError;
use crate::presentation::extractors::{SchemaJson, SchemaQuery};
use crate::presentation::handlers::helpers::{log_request, map_api_error};

pub async fn generate_tokens(
    State(app_state): State<Arc<AppState>>,
    SchemaQuery(query): SchemaQuery<GenerateQueryDto>,
) -> Result<Json<TokenResponseDto>, ApiError> {
    log_request("GET /generate");

    app_state
        .text_service
        .generate_tokens(query)
        .map(Json)
        .map_err(map_api_error("Failed to generate tokens"))
}

pub async fn tokenize_text(
    State(app_state): State<Arc<AppState>>,
    SchemaJson(dto): SchemaJson<TextInputDto>,
) -> Result<Json<TokenResponseDto>, ApiError> {
    log_request("POST /tokenize");

    app_state
        .text_service
        .tokenize_text(dto)
        .map(Json)
        .map_err(map_api_error("Failed to tokenize text"))
}

pub async fn generate_checksum(
    State(app_state): State<Arc<AppState>>,
    SchemaJson(dto): SchemaJson<TextInputDto>,
) -> Json<ChecksumResponseDto> {
    log_request("POST /checksum");

    Json(app_state.text_service.compute_checksum(dto))
}
