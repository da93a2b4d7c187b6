use chrono::Utc;
use rand::RngExt;

use crate::domain::repository::{CartRepository, ProductRepository};
use crate::domain::types::CartItem;
use crate::error::CatalogServiceError;

/// Five-digit cart item number.
fn generate_item_no() -> i64 {
    let mut rng = rand::rng();
    rng.random_range(10_000..=99_999)
}

// ── AddToCart ────────────────────────────────────────────────────────────────

pub struct AddToCartInput {
    pub product_no: String,
    pub quantity: i32,
    pub cust_name: String,
    pub cust_email: String,
    pub cust_mob: String,
}

pub struct AddToCartUseCase<P, C>
where
    P: ProductRepository,
    C: CartRepository,
{
    pub products: P,
    pub cart: C,
}

impl<P, C> AddToCartUseCase<P, C>
where
    P: ProductRepository,
    C: CartRepository,
{
    pub async fn execute(&self, input: AddToCartInput) -> Result<CartItem, CatalogServiceError> {
        let product = self
            .products
            .find_by_no(&input.product_no)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)?;

        let total_cost = f64::from(input.quantity) * product.price;
        let item = CartItem {
            item_no: generate_item_no(),
            cust_email: input.cust_email,
            cust_name: input.cust_name,
            cust_mob: input.cust_mob,
            product_no: product.product_no,
            product_name: product.name,
            quantity: input.quantity,
            unit_price: product.price,
            total_cost,
            created_at: Utc::now(),
        };
        self.cart.create(&item).await?;
        Ok(item)
    }
}

// ── ListCartItems ────────────────────────────────────────────────────────────

pub struct ListCartItemsUseCase<C: CartRepository> {
    pub cart: C,
}

impl<C: CartRepository> ListCartItemsUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<CartItem>, CatalogServiceError> {
        self.cart.list().await
    }
}
