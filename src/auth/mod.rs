// Session token issuance, validation and revocation

pub mod jwt;
pub mod password;
pub mod revocation;

pub use jwt::{Claims, JwtService};
pub use revocation::RevocationList;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ServiceError;

/// Identity decoded from a valid session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub trainee_id: Uuid,
    pub email: String,
}

/// Gate in front of every authenticated RPC: validates a bearer token
/// against the revocation list, signature and expiry.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    jwt: JwtService,
    revoked: RevocationList,
}

impl TokenAuthenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            jwt: JwtService::new(secret),
            revoked: RevocationList::new(),
        }
    }

    /// Issue a session token for a trainee
    pub fn issue(&self, trainee_id: Uuid, email: &str) -> Result<String, ServiceError> {
        self.jwt.create_token(trainee_id, email)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// Revocation is checked before any signature work: a revoked token is
    /// rejected even while it still verifies cryptographically.
    pub fn authenticate(&self, token: &str) -> Result<SessionClaims, ServiceError> {
        if token.is_empty() {
            return Err(ServiceError::MissingToken);
        }
        if self.revoked.contains(token) {
            return Err(ServiceError::RevokedToken);
        }

        let claims = self.jwt.verify(token)?;
        let trainee_id = Uuid::parse_str(&claims.sub).map_err(|_| ServiceError::InvalidToken)?;

        Ok(SessionClaims {
            trainee_id,
            email: claims.email,
        })
    }

    /// Add the presented token to the revocation list.
    ///
    /// The entry lives until the token's own expiry; if the payload cannot be
    /// decoded the full validity window is assumed.
    pub fn revoke(&self, token: &str) {
        let expires_at = self
            .jwt
            .peek_expiry(token)
            .unwrap_or_else(|| Utc::now() + self.jwt.expires_in());
        self.revoked.insert(token, expires_at);
    }
}
