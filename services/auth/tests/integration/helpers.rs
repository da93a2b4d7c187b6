use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use verdant_auth::domain::repository::{MailerPort, UserRepository, VerificationRepository};
use verdant_auth::domain::types::{CodePurpose, UserRecord, VerificationCode};
use verdant_auth::error::AuthServiceError;
use verdant_auth::password;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

/// Clones share the same backing store, so one mock can be handed to several
/// usecases and inspected afterwards.
#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<UserRecord>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn stored(&self, email: &str) -> Option<UserRecord> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &UserRecord) -> Result<(), AuthServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        if let Some(user) = self
            .users
            .lock()
            .unwrap()
            .iter_mut()
            .find(|u| u.email == email)
        {
            user.password_hash = password_hash.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<bool, AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.email != email);
        Ok(users.len() < before)
    }
}

// ── MockVerificationRepo ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockVerificationRepo {
    pub codes: Arc<Mutex<Vec<VerificationCode>>>,
    pub verified: Arc<Mutex<Vec<String>>>,
}

impl MockVerificationRepo {
    pub fn new(codes: Vec<VerificationCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            verified: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn stored(&self, email: &str, purpose: CodePurpose) -> Option<VerificationCode> {
        self.codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email && c.purpose == purpose)
            .cloned()
    }
}

impl VerificationRepository for MockVerificationRepo {
    async fn upsert(&self, entry: &VerificationCode) -> Result<(), AuthServiceError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| !(c.email == entry.email && c.purpose == entry.purpose));
        codes.push(entry.clone());
        Ok(())
    }

    async fn find(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, AuthServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email && c.purpose == purpose)
            .cloned())
    }

    async fn delete(&self, email: &str, purpose: CodePurpose) -> Result<(), AuthServiceError> {
        self.codes
            .lock()
            .unwrap()
            .retain(|c| !(c.email == email && c.purpose == purpose));
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<(), AuthServiceError> {
        self.verified.lock().unwrap().push(email.to_owned());
        Ok(())
    }
}

// ── Mailers ──────────────────────────────────────────────────────────────────

pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
}

impl MailerPort for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AuthServiceError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

/// Mailer whose every dispatch fails, for delivery-error paths.
#[derive(Clone)]
pub struct FailingMailer;

impl MailerPort for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), AuthServiceError> {
        Err(AuthServiceError::Delivery)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(email: &str, plaintext_password: &str) -> UserRecord {
    UserRecord {
        email: email.to_owned(),
        password_hash: password::hash(plaintext_password).unwrap(),
        user_no: Uuid::new_v4(),
        created_at: Utc::now(),
    }
}

/// Entry expiring `ttl_secs` from now; pass a negative value for an already
/// expired entry.
pub fn test_code_entry(
    email: &str,
    purpose: CodePurpose,
    code: &str,
    ttl_secs: i64,
) -> VerificationCode {
    let now = Utc::now();
    VerificationCode {
        email: email.to_owned(),
        purpose,
        code: code.to_owned(),
        expires_at: now + chrono::Duration::seconds(ttl_secs),
        created_at: now,
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
