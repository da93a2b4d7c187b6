use chrono::{Duration, Utc};
use rand::RngExt;

use crate::domain::repository::{MailerPort, UserRepository, VerificationRepository};
use crate::domain::types::{CODE_TTL_SECS, CodePurpose, VerificationCode};
use crate::error::AuthServiceError;

/// Six-digit numeric one-time code, uniform over [100000, 999999]. No
/// uniqueness guarantee across calls; the overwrite-on-issue invariant keeps
/// at most one live code per (email, purpose).
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..=999_999).to_string()
}

pub(crate) fn new_entry(email: String, purpose: CodePurpose) -> VerificationCode {
    let now = Utc::now();
    VerificationCode {
        email,
        purpose,
        code: generate_code(),
        expires_at: now + Duration::seconds(CODE_TTL_SECS),
        created_at: now,
    }
}

// ── SendVerification ─────────────────────────────────────────────────────────

pub struct SendVerificationInput {
    pub email: String,
}

/// "Already registered" is a short-circuit success, not an error: the caller
/// still gets a 200 and no code is issued or dispatched.
#[derive(Debug, PartialEq, Eq)]
pub enum SendVerificationOutput {
    Sent,
    AlreadyRegistered,
}

pub struct SendVerificationUseCase<U, V, M>
where
    U: UserRepository,
    V: VerificationRepository,
    M: MailerPort,
{
    pub users: U,
    pub codes: V,
    pub mailer: M,
}

impl<U, V, M> SendVerificationUseCase<U, V, M>
where
    U: UserRepository,
    V: VerificationRepository,
    M: MailerPort,
{
    pub async fn execute(
        &self,
        input: SendVerificationInput,
    ) -> Result<SendVerificationOutput, AuthServiceError> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Ok(SendVerificationOutput::AlreadyRegistered);
        }

        let entry = new_entry(input.email.clone(), CodePurpose::Signup);
        self.codes.upsert(&entry).await?;

        // The code travels out of band only; it is never echoed in a response.
        self.mailer
            .send(
                &input.email,
                "Verification code for your account",
                &format!("Your verification code is: {}", entry.code),
            )
            .await?;

        Ok(SendVerificationOutput::Sent)
    }
}

// ── VerifyCode ───────────────────────────────────────────────────────────────

pub struct VerifyCodeInput {
    pub email: String,
    pub code: String,
}

pub struct VerifyCodeUseCase<V: VerificationRepository> {
    pub codes: V,
}

impl<V: VerificationRepository> VerifyCodeUseCase<V> {
    pub async fn execute(&self, input: VerifyCodeInput) -> Result<(), AuthServiceError> {
        let entry = self
            .codes
            .find(&input.email, CodePurpose::Signup)
            .await?
            .ok_or(AuthServiceError::CodeMismatch)?;

        // Expiry first: an expired entry rejects every attempt until a fresh
        // code overwrites it. It is left in place (lazy expiry).
        if entry.is_expired() {
            return Err(AuthServiceError::CodeExpired);
        }
        if entry.code != input.code {
            return Err(AuthServiceError::CodeMismatch);
        }

        // Single use: consume the entry, then record the proven address.
        self.codes.delete(&input.email, CodePurpose::Signup).await?;
        self.codes.mark_verified(&input.email).await?;
        Ok(())
    }
}
