use crate::domain::repository::{MailerPort, UserRepository, VerificationRepository};
use crate::domain::types::CodePurpose;
use crate::error::AuthServiceError;
use crate::password;
use crate::usecase::verification::new_entry;

// ── InitiateReset ────────────────────────────────────────────────────────────

pub struct InitiateResetInput {
    pub email: String,
}

pub struct InitiateResetUseCase<U, V, M>
where
    U: UserRepository,
    V: VerificationRepository,
    M: MailerPort,
{
    pub users: U,
    pub codes: V,
    pub mailer: M,
}

impl<U, V, M> InitiateResetUseCase<U, V, M>
where
    U: UserRepository,
    V: VerificationRepository,
    M: MailerPort,
{
    pub async fn execute(&self, input: InitiateResetInput) -> Result<(), AuthServiceError> {
        // A reset targets an existing account, unlike signup verification,
        // which short-circuits when the account already exists.
        if self.users.find_by_email(&input.email).await?.is_none() {
            return Err(AuthServiceError::UserNotFound);
        }

        let entry = new_entry(input.email.clone(), CodePurpose::PasswordReset);
        self.codes.upsert(&entry).await?;

        self.mailer
            .send(
                &input.email,
                "Password reset code for your account",
                &format!("Your password reset code is: {}", entry.code),
            )
            .await?;
        Ok(())
    }
}

// ── CompleteReset ────────────────────────────────────────────────────────────

pub struct CompleteResetInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

pub struct CompleteResetUseCase<U, V>
where
    U: UserRepository,
    V: VerificationRepository,
{
    pub users: U,
    pub codes: V,
}

impl<U, V> CompleteResetUseCase<U, V>
where
    U: UserRepository,
    V: VerificationRepository,
{
    pub async fn execute(&self, input: CompleteResetInput) -> Result<(), AuthServiceError> {
        let entry = self
            .codes
            .find(&input.email, CodePurpose::PasswordReset)
            .await?
            .ok_or(AuthServiceError::CodeMismatch)?;

        // On either failure the stored hash stays untouched.
        if entry.is_expired() {
            return Err(AuthServiceError::CodeExpired);
        }
        if entry.code != input.code {
            return Err(AuthServiceError::CodeMismatch);
        }

        let password_hash = password::hash(&input.new_password)?;
        self.users
            .update_password(&input.email, &password_hash)
            .await?;

        // Consume last: a replayed code must find nothing.
        self.codes
            .delete(&input.email, CodePurpose::PasswordReset)
            .await?;
        Ok(())
    }
}
