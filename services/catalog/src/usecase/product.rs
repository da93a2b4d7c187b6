use chrono::Utc;
use futures::future::try_join_all;
use rand::RngExt;

use crate::domain::repository::{ObjectStorePort, ProductRepository};
use crate::domain::types::{ImageUpload, Product, ProductUpdate};
use crate::error::CatalogServiceError;

/// Five-digit product number as a string. No uniqueness guarantee; a
/// collision surfaces as an insert conflict.
pub fn generate_product_no() -> String {
    let mut rng = rand::rng();
    rng.random_range(10_000..=99_999).to_string()
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductInput {
    pub name: String,
    pub small_description: String,
    pub long_description: String,
    pub card_description: String,
    pub category: String,
    pub price: f64,
    pub images: Vec<ImageUpload>,
}

pub struct CreateProductUseCase<P, O>
where
    P: ProductRepository,
    O: ObjectStorePort,
{
    pub products: P,
    pub store: O,
}

impl<P, O> CreateProductUseCase<P, O>
where
    P: ProductRepository,
    O: ObjectStorePort,
{
    pub async fn execute(&self, input: CreateProductInput) -> Result<Product, CatalogServiceError> {
        let product_no = generate_product_no();

        // Upload all images concurrently. Any failure fails the request;
        // objects already written are left behind (no compensation).
        let uploads = input.images.into_iter().map(|image| {
            let key = format!("{product_no}-{}", image.filename);
            let store = &self.store;
            async move { store.upload(image, &key).await }
        });
        let images = try_join_all(uploads).await?;

        let product = Product {
            product_no,
            name: input.name,
            small_description: input.small_description,
            long_description: input.long_description,
            card_description: input.card_description,
            category: input.category,
            price: input.price,
            images,
            created_at: Utc::now(),
        };
        self.products.create(&product).await?;
        Ok(product)
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> GetProductUseCase<P> {
    pub async fn execute(&self, product_no: &str) -> Result<Product, CatalogServiceError> {
        self.products
            .find_by_no(product_no)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> ListProductsUseCase<P> {
    pub async fn execute(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        self.products.list(category).await
    }
}

// ── FindProductsByName ───────────────────────────────────────────────────────

pub struct FindProductsByNameUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> FindProductsByNameUseCase<P> {
    pub async fn execute(&self, name: &str) -> Result<Vec<Product>, CatalogServiceError> {
        let products = self.products.find_by_name(name).await?;
        if products.is_empty() {
            return Err(CatalogServiceError::ProductNotFound);
        }
        Ok(products)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> UpdateProductUseCase<P> {
    pub async fn execute(
        &self,
        product_no: &str,
        fields: ProductUpdate,
    ) -> Result<Product, CatalogServiceError> {
        self.products
            .update(product_no, &fields)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<P: ProductRepository> {
    pub products: P,
}

impl<P: ProductRepository> DeleteProductUseCase<P> {
    /// Deletion is idempotent: removing an absent product is still a success.
    pub async fn execute(&self, product_no: &str) -> Result<(), CatalogServiceError> {
        self.products.delete(product_no).await?;
        Ok(())
    }
}
