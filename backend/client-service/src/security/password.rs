/// Password hashing using Argon2id
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};

/// Hash a password using Argon2id.
/// Returns the hash string suitable for storage in database.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(rand::thread_rng());
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal("Failed to hash password".to_string()))?
        .to_string();

    Ok(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHash;

    #[test]
    fn hash_is_parseable_phc_string() {
        let hash = hash_password("secret-password").unwrap();
        assert!(PasswordHash::new(&hash).is_ok());
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("secret-password").unwrap();
        let second = hash_password("secret-password").unwrap();
        assert_ne!(first, second);
    }
}
