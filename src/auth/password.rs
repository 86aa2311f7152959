use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ServiceError;

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, ServiceError> {
    Ok(verify(password, hashed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hashed = hash_password("pw").unwrap();

        assert_ne!(hashed, "pw");
        assert!(verify_password("pw", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("pw").unwrap();
        let b = hash_password("pw").unwrap();
        assert_ne!(a, b);
    }
}
