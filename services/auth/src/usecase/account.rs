use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use verdant_auth_types::token::JwtClaims;

use crate::domain::repository::UserRepository;
use crate::domain::types::UserRecord;
use crate::error::AuthServiceError;
use crate::password;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token for `email`, expiring `ttl_secs` from now.
pub fn issue_access_token(
    email: &str,
    secret: &str,
    ttl_secs: u64,
) -> Result<(String, u64), AuthServiceError> {
    let exp = now_secs() + ttl_secs;
    let claims = JwtClaims {
        sub: email.to_owned(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignupOutput {
    pub user_no: Uuid,
}

pub struct SignupUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SignupUseCase<U> {
    pub async fn execute(&self, input: SignupInput) -> Result<SignupOutput, AuthServiceError> {
        // Fail closed before hashing; the existing record must not be touched.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AuthServiceError::UserAlreadyExists);
        }

        let password_hash = password::hash(&input.password)?;
        let user = UserRecord {
            email: input.email,
            password_hash,
            user_no: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;

        Ok(SignupOutput {
            user_no: user.user_no,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub email: String,
    pub token: String,
    pub token_exp: u64,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AuthServiceError> {
        // Unknown account and wrong password collapse into the same error so
        // the response cannot be used to probe which addresses are registered.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !password::verify(&input.password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let (token, token_exp) =
            issue_access_token(&user.email, &self.jwt_secret, self.token_ttl_secs)?;

        Ok(LoginOutput {
            email: user.email,
            token,
            token_exp,
        })
    }
}
