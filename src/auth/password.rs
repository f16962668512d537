// Password hashing with bcrypt.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, String> {
    hash(plain, DEFAULT_COST).map_err(|e| format!("failed to hash password: {e}"))
}

/// Checks a plaintext password against a stored hash.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, String> {
    verify(plain, hashed).map_err(|e| format!("failed to verify password: {e}"))
}
