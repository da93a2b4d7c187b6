use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};

use verdant_auth_schema::{users, verification_codes, verified_emails};

use crate::domain::repository::{UserRepository, VerificationRepository};
use crate::domain::types::{CodePurpose, UserRecord, VerificationCode};
use crate::error::AuthServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthServiceError> {
        let model = users::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &UserRecord) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            user_no: Set(user.user_no),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user password")?;
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<bool, AuthServiceError> {
        let result = users::Entity::delete_by_id(email.to_owned())
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> UserRecord {
    UserRecord {
        email: model.email,
        password_hash: model.password_hash,
        user_no: model.user_no,
        created_at: model.created_at,
    }
}

// ── Verification code repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVerificationRepository {
    pub db: DatabaseConnection,
}

impl VerificationRepository for DbVerificationRepository {
    async fn upsert(&self, entry: &VerificationCode) -> Result<(), AuthServiceError> {
        let model = verification_codes::ActiveModel {
            email: Set(entry.email.clone()),
            purpose: Set(entry.purpose.as_str().to_owned()),
            code: Set(entry.code.clone()),
            expires_at: Set(entry.expires_at),
            created_at: Set(entry.created_at),
        };
        // Overwrite any prior entry for (email, purpose): last write wins.
        verification_codes::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    verification_codes::Column::Email,
                    verification_codes::Column::Purpose,
                ])
                .update_columns([
                    verification_codes::Column::Code,
                    verification_codes::Column::ExpiresAt,
                    verification_codes::Column::CreatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert verification code")?;
        Ok(())
    }

    async fn find(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, AuthServiceError> {
        let model =
            verification_codes::Entity::find_by_id((email.to_owned(), purpose.as_str().to_owned()))
                .one(&self.db)
                .await
                .context("find verification code")?;
        Ok(model.map(|m| entry_from_model(m, purpose)))
    }

    async fn delete(&self, email: &str, purpose: CodePurpose) -> Result<(), AuthServiceError> {
        verification_codes::Entity::delete_by_id((email.to_owned(), purpose.as_str().to_owned()))
            .exec(&self.db)
            .await
            .context("delete verification code")?;
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<(), AuthServiceError> {
        let model = verified_emails::ActiveModel {
            email: Set(email.to_owned()),
            verified_at: Set(Utc::now()),
        };
        verified_emails::Entity::insert(model)
            .on_conflict(
                OnConflict::column(verified_emails::Column::Email)
                    .update_columns([verified_emails::Column::VerifiedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("mark email verified")?;
        Ok(())
    }
}

fn entry_from_model(model: verification_codes::Model, purpose: CodePurpose) -> VerificationCode {
    VerificationCode {
        email: model.email,
        purpose,
        code: model.code,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}
