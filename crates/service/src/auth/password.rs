//! bcrypt password hashing.

use std::sync::OnceLock;

use bcrypt::{hash, verify};

use super::errors::AuthError;

/// Work factor for new hashes.
pub const HASH_COST: u32 = 10;

/// bcrypt ignores everything past this many bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Reject passwords bcrypt would silently truncate. Only new passwords go
/// through this; stored hashes keep verifying as before.
pub fn check_password_length(password: &str) -> Result<(), AuthError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthError::Validation(format!(
            "password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Hash `password` with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, HASH_COST).map_err(|e| AuthError::HashError(format!("failed to hash password: {e}")))
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Spend one bcrypt verification when there is no stored hash to check, so a
/// login for an unknown email costs about as much as a wrong password.
pub fn verify_dummy(password: &str) {
    let dummy = DUMMY_HASH.get_or_init(|| hash("not-a-real-password", HASH_COST).ok());
    if let Some(dummy) = dummy {
        let _ = verify(password, dummy);
    }
}

/// `Ok(false)` on mismatch; `Err` only when `hashed` is not a bcrypt hash.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AuthError> {
    verify(password, hashed).map_err(|e| AuthError::HashError(format!("failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let h = hash_password("pw").unwrap();
        assert!(h.starts_with("$2"));
        assert!(!h.contains("pw"));
        assert!(verify_password("pw", &h).unwrap());
        assert!(!verify_password("wrong", &h).unwrap());
    }

    #[test]
    fn salt_is_random() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn long_passwords_are_rejected_before_hashing() {
        let at_limit = "p".repeat(MAX_PASSWORD_BYTES);
        assert!(check_password_length(&at_limit).is_ok());

        let over = format!("{at_limit}correct");
        assert!(matches!(check_password_length(&over), Err(AuthError::Validation(_))));

        // What the limit guards against: bytes past 72 do not reach the hash.
        let h = hash_password(&over).unwrap();
        assert!(verify_password(&format!("{at_limit}WRONG"), &h).unwrap());
    }

    #[test]
    fn multibyte_length_is_counted_in_bytes() {
        // 41 chars, 81 bytes
        let pw = "é".repeat(40) + "x";
        assert!(pw.chars().count() < MAX_PASSWORD_BYTES);
        assert!(check_password_length(&pw).is_err());
    }

    #[test]
    fn dummy_verification_does_not_panic() {
        verify_dummy("pw");
        verify_dummy("");
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(verify_password("pw", "not-a-hash"), Err(AuthError::HashError(_))));
    }
}
