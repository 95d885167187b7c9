//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check cache for the code
/// 2. On miss, resolve through the mapping store
/// 3. Populate the cache in the background (fire-and-forget)
/// 4. Return 307 Temporary Redirect
///
/// Cache failures fall back to the store. The code is not format-checked:
/// anything that is not a known code yields 404.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping owns the code, and 500 if the stored
/// URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let cached = match state.cache.get_url(&code).await {
        Ok(hit) => hit,
        Err(e) => {
            warn!(code = %code, error = %e, "Cache lookup failed, using store");
            None
        }
    };

    let original_url = match cached {
        Some(url) => {
            debug!(code = %code, "Cache HIT");
            url
        }
        None => {
            let mapping = state.shortener.resolve(&code).await?.ok_or_else(|| {
                AppError::not_found(
                    format!("Short code '{code}' not found"),
                    json!({ "code": code }),
                )
            })?;

            let cache = state.cache.clone();
            let short_code = mapping.short_code.clone();
            let url = mapping.original_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(&short_code, &url).await {
                    warn!(error = %e, "Failed to cache URL");
                }
            });

            mapping.original_url
        }
    };

    let location = HeaderValue::from_str(&original_url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
