use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::domain::types::CartItem;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::cart::{AddToCartInput, AddToCartUseCase, ListCartItemsUseCase};

#[derive(Serialize)]
pub struct CartItemResponse {
    pub item_no: i64,
    pub cust_email: String,
    pub cust_name: String,
    pub cust_mob: String,
    pub product_no: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_cost: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            item_no: item.item_no,
            cust_email: item.cust_email,
            cust_name: item.cust_name,
            cust_mob: item.cust_mob,
            product_no: item.product_no,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_cost: item.total_cost,
        }
    }
}

// ── POST /cart ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddToCartRequest {
    pub product_no: String,
    pub quantity: i32,
    pub cust_name: String,
    pub cust_email: String,
    pub cust_mob: String,
}

#[derive(Serialize)]
pub struct AddToCartResponse {
    pub message: &'static str,
    pub item: CartItemResponse,
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let usecase = AddToCartUseCase {
        products: state.product_repo(),
        cart: state.cart_repo(),
    };
    let item = usecase
        .execute(AddToCartInput {
            product_no: body.product_no,
            quantity: body.quantity,
            cust_name: body.cust_name,
            cust_email: body.cust_email,
            cust_mob: body.cust_mob,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddToCartResponse {
            message: "item added to cart successfully",
            item: item.into(),
        }),
    ))
}

// ── GET /cart ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CartListResponse {
    pub items: Vec<CartItemResponse>,
}

pub async fn get_all_cart_items(
    State(state): State<AppState>,
) -> Result<Json<CartListResponse>, CatalogServiceError> {
    let usecase = ListCartItemsUseCase {
        cart: state.cart_repo(),
    };
    let items = usecase.execute().await?;
    Ok(Json(CartListResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
