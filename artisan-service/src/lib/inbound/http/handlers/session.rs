use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedArtisan;

/// Describe the session carried by the bearer token.
pub async fn get_session(
    Extension(artisan): Extension<AuthenticatedArtisan>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    let claims = artisan.claims;

    let (Some(issued_at), Some(expires_at)) = (claims.issued_at(), claims.expires_at()) else {
        return Err(ApiError::Unauthorized("Invalid token format".to_string()));
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SessionData {
            subject: claims.sub,
            issued_at,
            expires_at,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
