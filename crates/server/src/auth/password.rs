use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash an account password for storage in `users.password_hash`.
/// Every call salts fresh, so identical passwords never share a hash.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a login attempt against a stored hash. An error means the stored
/// hash is malformed; a clean mismatch comes back as `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored_hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guardian_password_round_trips() {
        let password = "rivers-family-2026";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn wrong_login_attempt_is_rejected() {
        let hash = hash_password("office-staff-passphrase").unwrap();
        assert!(!verify_password("office-staff-guess", &hash).unwrap());
    }

    #[test]
    fn stored_hash_is_phc_encoded() {
        let hash = hash_password("bus-depot-morning-run").unwrap();
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn same_password_salts_differently() {
        let password = "shared-household-password";
        let first = hash_password(password).unwrap();
        let second = hash_password(password).unwrap();
        assert_ne!(first, second);
        assert!(verify_password(password, &first).unwrap());
        assert!(verify_password(password, &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_errors_instead_of_matching() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
