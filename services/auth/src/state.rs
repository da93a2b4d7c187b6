use sea_orm::DatabaseConnection;

use crate::infra::db::{DbUserRepository, DbVerificationRepository};
use crate::infra::mailer::HttpMailer;

/// Shared application state passed to every handler via axum `State`.
/// Built once at startup; nothing in here is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: HttpMailer,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn verification_repo(&self) -> DbVerificationRepository {
        DbVerificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn mailer(&self) -> HttpMailer {
        self.mailer.clone()
    }
}
