use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use verdant_core::health::{healthz, readyz};
use verdant_core::middleware::request_id_layer;

use crate::guard::require_auth;
use crate::handlers::{
    cart::{add_to_cart, get_all_cart_items},
    contact::{create_contact, get_all_contacts},
    product::{
        create_product, delete_product, get_all_products, get_product, get_products_by_name,
        update_product,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Mutating catalog routes sit behind the request gate.
    let protected = Router::new()
        .route("/products", post(create_product))
        .route("/products/{product_no}", put(update_product))
        .route("/products/{product_no}", delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Products (read)
        .route("/products", get(get_all_products))
        .route("/products/{product_no}", get(get_product))
        .route("/products/by-name/{name}", get(get_products_by_name))
        // Cart
        .route("/cart", post(add_to_cart))
        .route("/cart", get(get_all_cart_items))
        // Contacts
        .route("/contacts", post(create_contact))
        .route("/contacts", get(get_all_contacts))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
