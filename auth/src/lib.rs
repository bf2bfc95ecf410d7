//! Credential authentication and session token issuance
//!
//! Checks an email/password pair against a stored account and, on success,
//! issues a signed, time-bounded session token:
//! - Credential lookup (`AccountLookup`, implemented by the account store)
//! - Password comparison (Argon2id)
//! - Session tokens (HS256 JWT carrying only `sub`, `iat` and `exp`)
//! - Authentication coordination with a uniform failure for unknown accounts
//!   and wrong passwords
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{JwtHandler, TokenIssuer};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue("user123", Duration::hours(24)).unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod account;
pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use account::Account;
pub use account::AccountLookup;
pub use account::AccountRecord;
pub use account::LookupError;
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::ErrorKind;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use password::PasswordComparator;
pub use password::PasswordError;
pub use password::PasswordHasher;
