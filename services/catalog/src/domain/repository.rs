#![allow(async_fn_in_trait)]

use crate::domain::types::{CartItem, Contact, ImageUpload, Product, ProductUpdate};
use crate::error::CatalogServiceError;

pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), CatalogServiceError>;

    async fn find_by_no(&self, product_no: &str) -> Result<Option<Product>, CatalogServiceError>;

    /// All products, optionally narrowed to one category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogServiceError>;

    /// Products can share a name; all matches are returned.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, CatalogServiceError>;

    /// Returns the updated product, or `None` if no such product exists.
    async fn update(
        &self,
        product_no: &str,
        fields: &ProductUpdate,
    ) -> Result<Option<Product>, CatalogServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, product_no: &str) -> Result<bool, CatalogServiceError>;
}

pub trait CartRepository: Send + Sync {
    async fn create(&self, item: &CartItem) -> Result<(), CatalogServiceError>;

    async fn list(&self) -> Result<Vec<CartItem>, CatalogServiceError>;
}

pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &Contact) -> Result<(), CatalogServiceError>;

    async fn list(&self) -> Result<Vec<Contact>, CatalogServiceError>;
}

/// Read-only view of the credential store, used by the request gate to
/// re-check that a token's subject still exists (revocation-by-deletion).
pub trait AccountPort: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, CatalogServiceError>;
}

/// Object storage for product images. Returns the public URL of the stored
/// object.
pub trait ObjectStorePort: Send + Sync {
    async fn upload(&self, image: ImageUpload, key: &str) -> Result<String, CatalogServiceError>;
}
