//! HTTP Basic authentication gate.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::{BasicAuthSettings, BASIC_AUTH_SCHEME};
use crate::errors::AppError;

/// Basic auth middleware.
///
/// Lets every request through when the gate is disabled. Otherwise the
/// `Authorization` header must carry exactly the configured credentials.
pub async fn basic_auth_middleware(
    State(settings): State<Arc<BasicAuthSettings>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !settings.enabled {
        return Ok(next.run(request).await);
    }

    let (username, password) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(decode_credentials)
        .ok_or(AppError::Unauthorized)?;

    if !settings.matches(&username, &password) {
        tracing::debug!(username = %username, "Basic auth rejected");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Split `Basic base64(user:pass)` into its parts.
///
/// The scheme name is case-insensitive. The password may itself contain `:`;
/// only the first one separates.
fn decode_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BASIC_AUTH_SCHEME) {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
