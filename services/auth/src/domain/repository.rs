#![allow(async_fn_in_trait)]

use crate::domain::types::{CodePurpose, UserRecord, VerificationCode};
use crate::error::AuthServiceError;

/// Credential store adapter for account records, keyed by email.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthServiceError>;

    async fn create(&self, user: &UserRecord) -> Result<(), AuthServiceError>;

    /// Replace the stored password hash. The only mutation an account sees.
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AuthServiceError>;

    /// Delete an account. Returns `true` if deleted, `false` if not found.
    /// Deleting an account revokes all its outstanding tokens via the
    /// request gate's existence re-check.
    async fn delete(&self, email: &str) -> Result<bool, AuthServiceError>;
}

/// Repository for one-time verification/reset codes.
pub trait VerificationRepository: Send + Sync {
    /// Insert or overwrite the live entry for (email, purpose). Last write
    /// wins; concurrent issuances are not serialized.
    async fn upsert(&self, entry: &VerificationCode) -> Result<(), AuthServiceError>;

    /// Fetch the stored entry regardless of expiry; the caller decides
    /// between mismatch and expiry (lazy expiry, no sweep).
    async fn find(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, AuthServiceError>;

    /// Remove a consumed entry.
    async fn delete(&self, email: &str, purpose: CodePurpose) -> Result<(), AuthServiceError>;

    /// Record that an address proved control via a signup code.
    async fn mark_verified(&self, email: &str) -> Result<(), AuthServiceError>;
}

/// Port for dispatching one-time codes out of band.
pub trait MailerPort: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AuthServiceError>;
}
