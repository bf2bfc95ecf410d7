use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Stored credential record as returned by an account store.
///
/// Only read by the authenticator, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

impl AccountRecord {
    pub fn new(id: impl ToString, email: impl ToString, password_hash: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        }
    }
}

impl fmt::Debug for AccountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Public-safe projection of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
    pub email: String,
}

impl From<&AccountRecord> for Account {
    fn from(record: &AccountRecord) -> Self {
        Self {
            id: record.id.clone(),
            email: record.email.clone(),
        }
    }
}

/// Error for account store failures other than "not found".
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("Account store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid account record: {0}")]
    InvalidRecord(String),
}

/// Credential lookup capability.
///
/// Email normalization and case-sensitivity are decided by the implementation.
#[async_trait]
pub trait AccountLookup: Send + Sync + 'static {
    /// Find the account registered under an email.
    ///
    /// # Arguments
    /// * `email` - Email exactly as presented by the caller
    ///
    /// # Returns
    /// Optional account record (None if no account matches)
    ///
    /// # Errors
    /// * `Unavailable` - The backing store could not be queried
    /// * `InvalidRecord` - A stored row could not be mapped to a record
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, LookupError>;
}
