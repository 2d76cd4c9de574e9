use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::dto::metadata_dto::{EndpointDirectoryDto, WelcomeResponseDto};
use crate::domain::models::text::NonEmptyText;
use crate::infrastructure::config::AppConfig;

const WELCOME_MESSAGE: &str = "Welcome to the Token Generation API!";
const SERVICE_SUMMARY: &str =
    "This API provides endpoints for text tokenization and checksum generation.";

/// Renders the static descriptions of this service from configuration.
pub struct MetadataService {
    config: Arc<AppConfig>,
}

impl MetadataService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn welcome(&self) -> WelcomeResponseDto {
        WelcomeResponseDto {
            message: WELCOME_MESSAGE.to_string(),
            participant: self.config.participant_name.clone(),
            environment: self.config.environment.clone(),
            description: SERVICE_SUMMARY.to_string(),
            endpoints: EndpointDirectoryDto {
                root: "Welcome message".to_string(),
                generate: "GET - Generate tokens from query parameter".to_string(),
                tokenize: "POST - Generate tokens from JSON body".to_string(),
                checksum: "POST - Generate checksum from text".to_string(),
            },
        }
    }

    /// OpenAPI 3.1 description of the HTTP surface.
    pub fn openapi_document(&self) -> Value {
        json!({
            "openapi": "3.1.0",
            "info": {
                "title": self.config.app_name,
                "description": self.config.app_description,
                "version": self.config.app_version,
            },
            "paths": openapi_paths(),
            "components": {
                "schemas": openapi_schemas(),
            },
        })
    }
}

fn openapi_paths() -> Value {
    let welcome = json!({
        "get": {
            "summary": "Welcome",
            "operationId": "welcome",
            "responses": {
                "200": json_response("Welcome metadata", json!({"type": "object"})),
            },
        },
    });

    let generate = json!({
        "get": {
            "summary": "Generate Tokens From Query",
            "operationId": "generate_tokens",
            "parameters": [{
                "name": "text",
                "in": "query",
                "required": true,
                "schema": {"type": "string", "title": "Text"},
            }],
            "responses": {
                "200": json_response("Successful Response", schema_ref("TokenResponse")),
                "400": json_response("Empty Input", schema_ref("HTTPError")),
            },
        },
    });

    let tokenize = json!({
        "post": {
            "summary": "Tokenize Text",
            "operationId": "tokenize_text",
            "requestBody": text_input_body(),
            "responses": {
                "200": json_response("Successful Response", schema_ref("TokenResponse")),
                "400": json_response("Empty Input", schema_ref("HTTPError")),
                "422": json_response("Validation Error", schema_ref("HTTPValidationError")),
            },
        },
    });

    let checksum = json!({
        "post": {
            "summary": "Generate Checksum",
            "operationId": "generate_checksum",
            "requestBody": text_input_body(),
            "responses": {
                "200": json_response("Successful Response", schema_ref("ChecksumResponse")),
                "422": json_response("Validation Error", schema_ref("HTTPValidationError")),
            },
        },
    });

    json!({
        "/": welcome,
        "/generate": generate,
        "/tokenize": tokenize,
        "/checksum": checksum,
    })
}

fn openapi_schemas() -> Value {
    let text_input = json!({
        "type": "object",
        "title": "TextInput",
        "required": ["text"],
        "properties": {
            "text": {
                "type": "string",
                "minLength": NonEmptyText::MIN_LENGTH,
                "title": "Text",
                "description": "The text to generate tokens from",
            },
        },
    });

    let token_response = json!({
        "type": "object",
        "title": "TokenResponse",
        "required": ["tokens", "count"],
        "properties": {
            "tokens": {"type": "array", "items": {"type": "string"}, "title": "Tokens"},
            "count": {"type": "integer", "minimum": 0, "title": "Count"},
        },
    });

    let checksum_response = json!({
        "type": "object",
        "title": "ChecksumResponse",
        "required": ["checksum", "original_text"],
        "properties": {
            "checksum": {"type": "string", "pattern": "^[0-9a-f]{32}$", "title": "Checksum"},
            "original_text": {"type": "string", "title": "Original Text"},
        },
    });

    let http_error = json!({
        "type": "object",
        "title": "HTTPError",
        "required": ["detail"],
        "properties": {
            "detail": {"type": "string", "title": "Detail"},
        },
    });

    let http_validation_error = json!({
        "type": "object",
        "title": "HTTPValidationError",
        "properties": {
            "detail": {
                "type": "array",
                "title": "Detail",
                "items": schema_ref("ValidationError"),
            },
        },
    });

    let validation_error = json!({
        "type": "object",
        "title": "ValidationError",
        "required": ["loc", "msg", "type"],
        "properties": {
            "loc": {"type": "array", "items": {"type": "string"}, "title": "Location"},
            "msg": {"type": "string", "title": "Message"},
            "type": {"type": "string", "title": "Error Type"},
        },
    });

    json!({
        "TextInput": text_input,
        "TokenResponse": token_response,
        "ChecksumResponse": checksum_response,
        "HTTPError": http_error,
        "HTTPValidationError": http_validation_error,
        "ValidationError": validation_error,
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": schema },
        },
    })
}

fn text_input_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": schema_ref("TextInput") },
        },
    })
}
