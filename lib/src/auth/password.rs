// lib/src/auth/password.rs

use models::errors::{ValidationError, ValidationResult};

/// Hash a plaintext password with a salted bcrypt digest.
pub fn hash_password(plaintext: &str) -> ValidationResult<String> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
        .map_err(|_| ValidationError::PasswordHashingFailed)
}

/// Verify a plaintext password against a stored hash. A malformed hash
/// verifies as false rather than erroring, so a corrupted record reads as
/// plain "invalid credentials".
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_wrong_password_does_not() {
        let hash = hash_password("p1").unwrap();
        assert!(verify_password("p1", &hash));
        assert!(!verify_password("p2", &hash));
    }

    #[test]
    fn malformed_hash_fails_closed() {
        assert!(!verify_password("p1", "not-a-bcrypt-hash"));
    }
}
