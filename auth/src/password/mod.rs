pub mod argon2;
pub mod errors;

use async_trait::async_trait;

pub use self::argon2::PasswordHasher;
pub use errors::PasswordError;

/// Secure comparison of a plaintext secret against a stored hash.
#[async_trait]
pub trait PasswordComparator: Send + Sync + 'static {
    /// Check a plaintext password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password presented by the caller
    /// * `stored_hash` - Hash kept at rest for the account
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is unusable or the comparison could not run
    async fn compare(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError>;
}
