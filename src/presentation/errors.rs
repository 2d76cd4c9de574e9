use axum::extract::rejection::{BytesRejection, JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::application::errors::ApplicationError;

/// One entry of a 422 response `detail` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(location: &str, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec![location.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Unprocessable entity: {}", join_messages(.0))]
    UnprocessableEntity(Vec<ValidationIssue>),
}

fn join_messages(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::EmptyInput(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_error",
        };

        ApiError::UnprocessableEntity(vec![ValidationIssue::new(
            "body",
            rejection.body_text(),
            kind,
        )])
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::UnprocessableEntity(vec![ValidationIssue::new(
            "body",
            rejection.body_text(),
            "body_error",
        )])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::UnprocessableEntity(vec![ValidationIssue::new(
            "query",
            rejection.body_text(),
            "value_error",
        )])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(detail)
            | ApiError::NotFound(detail)
            | ApiError::MethodNotAllowed(detail) => json!({ "detail": detail }),
            ApiError::UnprocessableEntity(issues) => json!({ "detail": issues }),
        };

        (status, Json(body)).into_response()
    }
}
