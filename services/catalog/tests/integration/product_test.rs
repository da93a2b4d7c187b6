use verdant_catalog::domain::types::{ImageUpload, ProductUpdate};
use verdant_catalog::error::CatalogServiceError;
use verdant_catalog::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, FindProductsByNameUseCase,
    GetProductUseCase, ListProductsUseCase, UpdateProductUseCase, generate_product_no,
};

use crate::helpers::{
    FailingObjectStore, MockObjectStore, MockProductRepo, test_image, test_product,
};

// ── generate_product_no ──────────────────────────────────────────────────────

#[test]
fn should_generate_five_digit_product_numbers() {
    for _ in 0..256 {
        let no = generate_product_no();
        assert_eq!(no.len(), 5);
        let value: u32 = no.parse().unwrap();
        assert!((10_000..=99_999).contains(&value), "{value}");
    }
}

// ── CreateProductUseCase ─────────────────────────────────────────────────────

fn create_input(images: Vec<ImageUpload>) -> CreateProductInput {
    CreateProductInput {
        name: "Monstera".to_owned(),
        small_description: "small".to_owned(),
        long_description: "long".to_owned(),
        card_description: "card".to_owned(),
        category: "indoor".to_owned(),
        price: 24.5,
        images,
    }
}

#[tokio::test]
async fn should_upload_images_and_store_product() {
    let products = MockProductRepo::empty();
    let store = MockObjectStore::default();
    let usecase = CreateProductUseCase {
        products: products.clone(),
        store: store.clone(),
    };

    let product = usecase
        .execute(create_input(vec![
            test_image("front.jpg"),
            test_image("side.jpg"),
        ]))
        .await
        .unwrap();

    // Every image ends up in the object store, keyed under the product.
    let keys = store.uploaded_keys.lock().unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().all(|k| k.starts_with(&product.product_no)));

    let stored = products.stored(&product.product_no).unwrap();
    assert_eq!(stored.images.len(), 2);
    assert!(stored.images[0].contains("front.jpg"));
    assert!(stored.images[1].contains("side.jpg"));
}

#[tokio::test]
async fn should_create_product_without_images() {
    let products = MockProductRepo::empty();
    let usecase = CreateProductUseCase {
        products: products.clone(),
        store: MockObjectStore::default(),
    };

    let product = usecase.execute(create_input(vec![])).await.unwrap();

    assert!(products.stored(&product.product_no).unwrap().images.is_empty());
}

#[tokio::test]
async fn should_fail_creation_when_an_upload_fails() {
    let products = MockProductRepo::empty();
    let usecase = CreateProductUseCase {
        products: products.clone(),
        store: FailingObjectStore,
    };

    let result = usecase.execute(create_input(vec![test_image("a.jpg")])).await;

    assert!(
        matches!(result, Err(CatalogServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert!(products.products.lock().unwrap().is_empty());
}

// ── GetProductUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_not_found_for_unknown_product() {
    let usecase = GetProductUseCase {
        products: MockProductRepo::empty(),
    };

    let result = usecase.execute("12345").await;

    assert!(
        matches!(result, Err(CatalogServiceError::ProductNotFound)),
        "expected ProductNotFound, got {result:?}"
    );
}

// ── ListProductsUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_products_filtered_by_category() {
    let usecase = ListProductsUseCase {
        products: MockProductRepo::new(vec![
            test_product("10001", "Monstera", "indoor", 24.5),
            test_product("10002", "Lavender", "outdoor", 9.0),
            test_product("10003", "Fern", "indoor", 12.0),
        ]),
    };

    let all = usecase.execute(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let indoor = usecase.execute(Some("indoor")).await.unwrap();
    assert_eq!(indoor.len(), 2);
    assert!(indoor.iter().all(|p| p.category == "indoor"));
}

// ── FindProductsByNameUseCase ────────────────────────────────────────────────

#[tokio::test]
async fn should_return_all_products_sharing_a_name() {
    let usecase = FindProductsByNameUseCase {
        products: MockProductRepo::new(vec![
            test_product("10001", "Monstera", "indoor", 24.5),
            test_product("10002", "Monstera", "outdoor", 19.5),
        ]),
    };

    let found = usecase.execute("Monstera").await.unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn should_return_not_found_when_no_product_matches_name() {
    let usecase = FindProductsByNameUseCase {
        products: MockProductRepo::empty(),
    };

    let result = usecase.execute("Monstera").await;

    assert!(
        matches!(result, Err(CatalogServiceError::ProductNotFound)),
        "expected ProductNotFound, got {result:?}"
    );
}

// ── UpdateProductUseCase ─────────────────────────────────────────────────────

fn update_fields(price: f64) -> ProductUpdate {
    ProductUpdate {
        name: "Monstera Deliciosa".to_owned(),
        small_description: "new small".to_owned(),
        long_description: "new long".to_owned(),
        card_description: "new card".to_owned(),
        category: "indoor".to_owned(),
        price,
    }
}

#[tokio::test]
async fn should_update_every_field_of_existing_product() {
    let products = MockProductRepo::new(vec![test_product("10001", "Monstera", "indoor", 24.5)]);
    let usecase = UpdateProductUseCase {
        products: products.clone(),
    };

    let updated = usecase.execute("10001", update_fields(29.0)).await.unwrap();

    assert_eq!(updated.name, "Monstera Deliciosa");
    assert_eq!(updated.price, 29.0);
    assert_eq!(products.stored("10001").unwrap().price, 29.0);
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_product() {
    let usecase = UpdateProductUseCase {
        products: MockProductRepo::empty(),
    };

    let result = usecase.execute("99999", update_fields(29.0)).await;

    assert!(
        matches!(result, Err(CatalogServiceError::ProductNotFound)),
        "expected ProductNotFound, got {result:?}"
    );
}

// ── DeleteProductUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_product_and_succeed_on_replay() {
    let products = MockProductRepo::new(vec![test_product("10001", "Monstera", "indoor", 24.5)]);
    let usecase = DeleteProductUseCase {
        products: products.clone(),
    };

    usecase.execute("10001").await.unwrap();
    assert!(products.stored("10001").is_none());

    // Idempotent: deleting an absent product is still a success.
    usecase.execute("10001").await.unwrap();
}
