use std::fmt::Display;

use crate::infrastructure::logging::logger;
use crate::presentation::errors::ApiError;

pub fn log_request(route: impl AsRef<str>) {
    logger::debug(&format!("Request: {}", route.as_ref()));
}

pub fn map_api_error<E>(context: impl AsRef<str>) -> impl FnOnce(E) -> ApiError
where
    E: Display + Into<ApiError>,
{
    let context = context.as_ref().to_string();

    move |error| {
        logger::warn(&format!("{}: {}", context, error));
        error.into()
    }
}
