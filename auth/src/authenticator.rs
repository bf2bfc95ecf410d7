use std::sync::Arc;

use chrono::Duration;

use crate::account::Account;
use crate::account::AccountLookup;
use crate::account::LookupError;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordComparator;
use crate::password::PasswordError;

/// Authentication coordinator: account lookup, password comparison, token issuance.
///
/// Collaborators are injected once and never mutated, so a single instance can
/// serve any number of concurrent requests.
pub struct Authenticator {
    accounts: Arc<dyn AccountLookup>,
    comparator: Arc<dyn PasswordComparator>,
    token_issuer: Arc<dyn TokenIssuer>,
    token_lifetime: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub account: Account,
    /// Signed session token
    pub token: String,
}

/// Transport-agnostic classification of an authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Internal,
}

/// Authentication operation errors.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password and
/// must stay identical for the two.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account lookup error: {0}")]
    LookupError(#[from] LookupError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl AuthenticationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthenticationError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthenticationError::LookupError(_)
            | AuthenticationError::PasswordError(_)
            | AuthenticationError::JwtError(_) => ErrorKind::Internal,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `accounts` - Credential lookup
    /// * `comparator` - Secure password comparison
    /// * `token_issuer` - Session token signer
    /// * `token_lifetime` - Validity window of issued tokens
    pub fn new(
        accounts: Arc<dyn AccountLookup>,
        comparator: Arc<dyn PasswordComparator>,
        token_issuer: Arc<dyn TokenIssuer>,
        token_lifetime: Duration,
    ) -> Self {
        Self {
            accounts,
            comparator,
            token_issuer,
            token_lifetime,
        }
    }

    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `email` - Email identifying the account
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// AuthenticationResult with the public account view and a signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password or empty input
    /// * `LookupError` - Account store failed
    /// * `PasswordError` - Stored hash could not be verified
    /// * `JwtError` - Token generation failed
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let Some(record) = self.accounts.find_by_email(email).await? else {
            tracing::debug!("Authentication rejected");
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self
            .comparator
            .compare(password, &record.password_hash)
            .await?
        {
            tracing::debug!("Authentication rejected");
            return Err(AuthenticationError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(&record.id, self.token_lifetime)?;
        tracing::debug!(account_id = %record.id, "Session token issued");

        Ok(AuthenticationResult {
            account: Account::from(&record),
            token,
        })
    }
}
