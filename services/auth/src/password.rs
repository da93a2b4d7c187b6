//! Password hashing. bcrypt with a fixed work factor; a fresh random salt is
//! embedded in the digest on every call, so equal inputs produce distinct
//! digests.

use crate::error::AuthServiceError;

/// bcrypt cost parameter. Fixed; changing it only affects newly stored
/// digests (the cost is embedded in each digest).
const HASH_COST: u32 = 10;

pub fn hash(plaintext: &str) -> Result<String, AuthServiceError> {
    bcrypt::hash(plaintext, HASH_COST).map_err(|e| AuthServiceError::Internal(e.into()))
}

pub fn verify(plaintext: &str, digest: &str) -> Result<bool, AuthServiceError> {
    bcrypt::verify(plaintext, digest).map_err(|e| AuthServiceError::Internal(e.into()))
}
