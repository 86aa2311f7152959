use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceError;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // Trainee id
    pub email: String, // Trainee email
    pub exp: usize,    // Expiration time
    pub iat: usize,    // Issued at
}

/// JWT token service for creating and validating session tokens.
///
/// Sessions are not persisted; the signed token is the session. Validity is
/// a fixed two hours from issuance.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in: Duration::hours(2),
        }
    }

    /// Create a session token for a trainee
    pub fn create_token(&self, trainee_id: Uuid, email: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + self.expires_in;

        let claims = Claims {
            sub: trainee_id.to_string(),
            email: email.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(ServiceError::from)
    }

    /// Validate and decode a token.
    ///
    /// Malformed, expired, and bad-signature tokens are not distinguished.
    pub fn verify(&self, token: &str) -> Result<Claims, ServiceError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::InvalidToken)
    }

    /// Best-effort expiry of an untrusted token, for revocation bookkeeping.
    ///
    /// The signature is deliberately not checked; the caller must not trust
    /// the result for anything but eviction timing.
    pub fn peek_expiry(&self, token: &str) -> Option<DateTime<Utc>> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .ok()
            .and_then(|token_data| DateTime::from_timestamp(token_data.claims.exp as i64, 0))
    }

    /// Fixed token validity window
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_creation_and_verification() {
        let jwt = JwtService::new("test_secret");
        let trainee_id = Uuid::new_v4();

        let token = jwt.create_token(trainee_id, "a@x.com").unwrap();
        let claims = jwt.verify(&token).unwrap();

        assert_eq!(claims.sub, trainee_id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = JwtService::new("secret_a")
            .create_token(Uuid::new_v4(), "a@x.com")
            .unwrap();

        assert!(matches!(
            JwtService::new("secret_b").verify(&token),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        let jwt = JwtService::new("test_secret");
        assert!(matches!(
            jwt.verify("not.a.token"),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn expiry_is_two_hours_from_issuance() {
        let jwt = JwtService::new("test_secret");
        let token = jwt.create_token(Uuid::new_v4(), "a@x.com").unwrap();
        let claims = jwt.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }

    #[test]
    fn peek_expiry_reads_unverified_claims() {
        let jwt = JwtService::new("test_secret");
        let token = jwt.create_token(Uuid::new_v4(), "a@x.com").unwrap();

        let exp = jwt.peek_expiry(&token).unwrap();
        let expected = Utc::now() + Duration::hours(2);
        assert!((exp - expected).num_seconds().abs() <= 5);

        // A different service (different secret) can still peek.
        let other = JwtService::new("another_secret");
        assert_eq!(other.peek_expiry(&token).unwrap(), exp);

        assert!(jwt.peek_expiry("garbage").is_none());
    }
}
