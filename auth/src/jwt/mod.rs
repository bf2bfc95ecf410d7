pub mod claims;
pub mod errors;
pub mod handler;

use chrono::Duration;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;

/// Issues signed, self-contained session tokens.
///
/// Implementations keep no per-token state; expiry is checked by verifiers.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Issue a token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Account identifier, written verbatim to the `sub` claim
    /// * `lifetime` - Time from issuance until the token expires
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    fn issue(&self, subject: &str, lifetime: Duration) -> Result<String, JwtError>;
}
