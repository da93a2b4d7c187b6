use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use verdant_auth_types::identity::Identity;

use crate::domain::types::{ImageUpload, Product, ProductUpdate};
use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, FindProductsByNameUseCase,
    GetProductUseCase, ListProductsUseCase, UpdateProductUseCase,
};

#[derive(Serialize)]
pub struct ProductResponse {
    pub product_no: String,
    pub name: String,
    pub small_description: String,
    pub long_description: String,
    pub card_description: String,
    pub category: String,
    pub price: f64,
    pub images: Vec<String>,
    #[serde(serialize_with = "verdant_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_no: product.product_no,
            name: product.name,
            small_description: product.small_description,
            long_description: product.long_description,
            card_description: product.card_description,
            category: product.category,
            price: product.price,
            images: product.images,
            created_at: product.created_at,
        }
    }
}

// ── POST /products (gated) ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreateProductResponse {
    pub message: &'static str,
    pub product: ProductResponse,
}

/// Multipart form: text fields plus any number of `images` parts.
pub async fn create_product(
    identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, CatalogServiceError> {
    let mut name = None;
    let mut small_description = None;
    let mut long_description = None;
    let mut card_description = None;
    let mut category = None;
    let mut price = None;
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| CatalogServiceError::MissingData)?
    {
        // Reading a field consumes it, so the name is captured up front.
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("images") => {
                let filename = field.file_name().unwrap_or("image").to_owned();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| CatalogServiceError::MissingData)?;
                images.push(ImageUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("name") => name = Some(read_text(field).await?),
            Some("small_description") => small_description = Some(read_text(field).await?),
            Some("long_description") => long_description = Some(read_text(field).await?),
            Some("card_description") => card_description = Some(read_text(field).await?),
            Some("category") => category = Some(read_text(field).await?),
            Some("price") => {
                price = Some(
                    read_text(field)
                        .await?
                        .parse::<f64>()
                        .map_err(|_| CatalogServiceError::MissingData)?,
                );
            }
            _ => {}
        }
    }

    tracing::info!(subject = %identity.email, "creating product");

    let usecase = CreateProductUseCase {
        products: state.product_repo(),
        store: state.object_store(),
    };
    let product = usecase
        .execute(CreateProductInput {
            name: name.ok_or(CatalogServiceError::MissingData)?,
            small_description: small_description.ok_or(CatalogServiceError::MissingData)?,
            long_description: long_description.ok_or(CatalogServiceError::MissingData)?,
            card_description: card_description.ok_or(CatalogServiceError::MissingData)?,
            category: category.ok_or(CatalogServiceError::MissingData)?,
            price: price.ok_or(CatalogServiceError::MissingData)?,
            images,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "product created successfully",
            product: product.into(),
        }),
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, CatalogServiceError> {
    field
        .text()
        .await
        .map_err(|_| CatalogServiceError::MissingData)
}

// ── GET /products ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

pub async fn get_all_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, CatalogServiceError> {
    let usecase = ListProductsUseCase {
        products: state.product_repo(),
    };
    let products = usecase.execute(query.category.as_deref()).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

// ── GET /products/{product_no} ───────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_no): Path<String>,
) -> Result<Json<ProductResponse>, CatalogServiceError> {
    let usecase = GetProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase.execute(&product_no).await?;
    Ok(Json(product.into()))
}

// ── GET /products/by-name/{name} ─────────────────────────────────────────────

pub async fn get_products_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, CatalogServiceError> {
    let usecase = FindProductsByNameUseCase {
        products: state.product_repo(),
    };
    let products = usecase.execute(&name).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

// ── PUT /products/{product_no} (gated) ───────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub small_description: String,
    pub long_description: String,
    pub card_description: String,
    pub category: String,
    pub price: f64,
}

pub async fn update_product(
    _identity: Identity,
    State(state): State<AppState>,
    Path(product_no): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, CatalogServiceError> {
    let usecase = UpdateProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase
        .execute(
            &product_no,
            ProductUpdate {
                name: body.name,
                small_description: body.small_description,
                long_description: body.long_description,
                card_description: body.card_description,
                category: body.category,
                price: body.price,
            },
        )
        .await?;
    Ok(Json(product.into()))
}

// ── DELETE /products/{product_no} (gated) ────────────────────────────────────

pub async fn delete_product(
    _identity: Identity,
    State(state): State<AppState>,
    Path(product_no): Path<String>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let usecase = DeleteProductUseCase {
        products: state.product_repo(),
    };
    usecase.execute(&product_no).await?;
    Ok(Json(MessageResponse {
        message: "product deleted successfully",
    }))
}
