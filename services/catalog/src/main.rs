use sea_orm::Database;
use tracing::info;

use verdant_catalog::config::CatalogConfig;
use verdant_catalog::infra::object_store::HttpObjectStore;
use verdant_catalog::router::build_router;
use verdant_catalog::state::AppState;
use verdant_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let object_store = HttpObjectStore {
        client: reqwest::Client::new(),
        base_url: config.object_store_url,
        bucket: config.object_store_bucket,
        api_key: config.object_store_api_key,
    };

    let state = AppState {
        db,
        object_store,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
