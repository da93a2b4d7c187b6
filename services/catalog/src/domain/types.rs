use chrono::{DateTime, Utc};

/// Catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_no: String,
    pub name: String,
    pub small_description: String,
    pub long_description: String,
    pub card_description: String,
    pub category: String,
    pub price: f64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Full-field product update. Images are set only at creation time.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub small_description: String,
    pub long_description: String,
    pub card_description: String,
    pub category: String,
    pub price: f64,
}

/// Cart line item. Name and price are copied from the product at add time.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub item_no: i64,
    pub cust_email: String,
    pub cust_name: String,
    pub cust_mob: String,
    pub product_no: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
}

/// Contact-form submission.
#[derive(Debug, Clone)]
pub struct Contact {
    pub sno: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Image payload received in the multipart form, pending upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
