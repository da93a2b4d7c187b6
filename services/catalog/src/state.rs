use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAccountPort, DbCartRepository, DbContactRepository, DbProductRepository,
};
use crate::infra::object_store::HttpObjectStore;

/// Shared application state passed to every handler via axum `State`.
/// Built once at startup; nothing in here is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub object_store: HttpObjectStore,
    pub jwt_secret: String,
}

impl AppState {
    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn cart_repo(&self) -> DbCartRepository {
        DbCartRepository {
            db: self.db.clone(),
        }
    }

    pub fn contact_repo(&self) -> DbContactRepository {
        DbContactRepository {
            db: self.db.clone(),
        }
    }

    pub fn account_port(&self) -> DbAccountPort {
        DbAccountPort {
            db: self.db.clone(),
        }
    }

    pub fn object_store(&self) -> HttpObjectStore {
        self.object_store.clone()
    }
}
