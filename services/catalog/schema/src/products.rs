use sea_orm::entity::prelude::*;

/// Catalog product, keyed by a random five-digit number assigned at creation.
/// `images` holds the public URLs returned by the object store as a JSON list.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_no: String,
    pub name: String,
    pub small_description: String,
    pub long_description: String,
    pub card_description: String,
    pub category: String,
    pub price: f64,
    pub images: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
