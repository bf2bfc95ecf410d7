use auth::Claims;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type holding the verified session of the caller
#[derive(Debug, Clone)]
pub struct AuthenticatedArtisan {
    pub claims: Claims,
}

/// Middleware that verifies the bearer session token and adds its claims to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.jwt_handler.verify(token).map_err(|e| {
        match &e {
            JwtError::TokenExpired => tracing::debug!("Session token expired"),
            _ => tracing::warn!(error = %e, "Session token rejected"),
        }
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedArtisan { claims });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        unauthorized("Invalid Authorization header format. Expected: Bearer <token>")
    })
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
