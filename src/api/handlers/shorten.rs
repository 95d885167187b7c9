//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, or returns the existing code for a URL seen before.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3dEf",
///   "short_url": "http://localhost:8000/aB3dEf"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not JSON or the URL is not an absolute http(s) URL
/// - 500 `code_generation_failed` if no free code was found
/// - 503 if the mapping store is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let mapping = state.shortener.shorten(&payload.url).await?;
    let short_url = state.shortener.short_url(&mapping.short_code);

    Ok(Json(ShortenResponse {
        short_code: mapping.short_code,
        short_url,
    }))
}
