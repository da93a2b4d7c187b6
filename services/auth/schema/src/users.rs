use sea_orm::entity::prelude::*;

/// Account record keyed by email.
/// `user_no` is the externally visible identifier, generated once at signup
/// and never changed; only `password_hash` is mutated (by password reset).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub user_no: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
