use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Session token claims.
///
/// Deliberately minimal: subject, issued-at and expiration only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject valid for `lifetime` from `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Account identifier
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Validity window
    ///
    /// # Returns
    /// Claims with sub, iat and exp set
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration falls outside the representable time range
    pub fn for_subject(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at.checked_add_signed(lifetime).ok_or_else(|| {
            JwtError::EncodingFailed(format!(
                "Token lifetime of {} seconds overflows the expiration time",
                lifetime.num_seconds()
            ))
        })?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Time between issuance and expiration.
    pub fn lifetime(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let issued_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = Claims::for_subject("u1", issued_at, Duration::hours(24)).unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert_eq!(claims.lifetime(), Duration::hours(24));
        assert_eq!(claims.issued_at(), Some(issued_at));
    }

    #[test]
    fn test_serializes_only_minimal_claims() {
        let issued_at = Utc.timestamp_opt(1000, 0).unwrap();
        let claims = Claims::for_subject("u1", issued_at, Duration::seconds(60)).unwrap();

        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "sub": "u1", "iat": 1000, "exp": 1060 })
        );
    }

    #[test]
    fn test_overflowing_lifetime_is_an_error() {
        let issued_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let result = Claims::for_subject("u1", issued_at, Duration::hours(10_000_000_000));

        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }
}
