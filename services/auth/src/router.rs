use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use verdant_core::health::{healthz, readyz};
use verdant_core::middleware::request_id_layer;

use crate::handlers::{
    account::{login, signup},
    reset::{forgot_password, reset_password},
    verification::{send_verification_email, verify_code},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/signup", post(signup))
        .route("/login", post(login))
        // Email verification
        .route("/send-verification-email", post(send_verification_email))
        .route("/verify-code", post(verify_code))
        // Password reset
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
