use std::fmt;

use auth::Account;
use auth::AuthenticationError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use email_address::EmailAddress;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    // A malformed email cannot match any account; answer exactly like a miss.
    if !EmailAddress::is_valid(&body.email) {
        return Err(AuthenticationError::InvalidCredentials.into());
    }

    let result = state
        .authenticator
        .authenticate(&body.email, &body.password)
        .await?;

    tracing::info!(artisan_id = %result.account.id, "Artisan authenticated");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            artisan: result.account.into(),
            token: result.token,
        },
    ))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

impl fmt::Debug for AuthenticateRequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateRequestBody")
            .field("email", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub artisan: ArtisanData,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtisanData {
    pub id: String,
    pub email: String,
}

impl From<Account> for ArtisanData {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
        }
    }
}
