use sea_orm::entity::prelude::*;

/// Cart line item. Product name and price are denormalized at add time, so a
/// later catalog edit does not reprice an existing cart.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_no: i64,
    pub cust_email: String,
    pub cust_name: String,
    pub cust_mob: String,
    pub product_no: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_cost: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
