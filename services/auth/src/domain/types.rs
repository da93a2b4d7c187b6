use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Credential-store account record, keyed by email.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub password_hash: String,
    /// Externally visible identifier, generated once at signup, immutable.
    pub user_no: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Distinguishes the two one-time-code flows sharing the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    Signup,
    PasswordReset,
}

impl CodePurpose {
    /// Stable string stored in the `purpose` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::PasswordReset => "password_reset",
        }
    }

    /// Convert from the stored column value. Returns `None` for unknown values.
    pub fn from_str(v: &str) -> Option<Self> {
        match v {
            "signup" => Some(Self::Signup),
            "password_reset" => Some(Self::PasswordReset),
            _ => None,
        }
    }
}

/// One-time code entry. At most one live entry exists per (email, purpose);
/// a new issuance overwrites the prior one.
#[derive(Debug, Clone)]
pub struct VerificationCode {
    pub email: String,
    pub purpose: CodePurpose,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    /// An entry is spent at or after its expiry instant.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Verification/reset code validity window in seconds (10 minutes).
pub const CODE_TTL_SECS: i64 = 600;
