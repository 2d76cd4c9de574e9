//! Request extractors that run the schema stage of validation.
//!
//! Body and query types declare their constraints through their
//! `Deserialize` impls. Any failure here becomes a 422 before the handler
//! body runs; business checks such as blank text happen later in the
//! application services.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::infrastructure::logging::logger;
use crate::presentation::errors::ApiError;

/// JSON body that satisfied its schema.
///
/// A body sent without any `Content-Type` is still parsed as JSON; an
/// explicit non-JSON content type is rejected.
#[derive(Debug, Clone)]
pub struct SchemaJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for SchemaJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if req.headers().contains_key(CONTENT_TYPE) {
            Json::<T>::from_request(req, state).await
        } else {
            let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                logger::debug(&format!("Failed to read request body: {}", rejection.body_text()));
                ApiError::from(rejection)
            })?;
            Json::<T>::from_bytes(&bytes)
        };

        match parsed {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                logger::debug(&format!("Rejected request body: {}", rejection.body_text()));
                Err(ApiError::from(rejection))
            }
        }
    }
}

/// Query string that satisfied its schema.
#[derive(Debug, Clone)]
pub struct SchemaQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for SchemaQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                logger::debug(&format!("Rejected query string: {}", rejection.body_text()));
                Err(ApiError::from(rejection))
            }
        }
    }
}
