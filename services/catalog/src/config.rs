/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for validating session tokens. Must match the auth
    /// service's secret.
    pub jwt_secret: String,
    /// Object store base URL (e.g. "https://storage.example.com").
    pub object_store_url: String,
    /// Bucket for product images. Env var: `OBJECT_STORE_BUCKET`.
    pub object_store_bucket: String,
    /// Bearer key for the object store API.
    pub object_store_api_key: String,
    /// TCP port to listen on (default 3002). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            object_store_url: std::env::var("OBJECT_STORE_URL").expect("OBJECT_STORE_URL"),
            object_store_bucket: std::env::var("OBJECT_STORE_BUCKET")
                .expect("OBJECT_STORE_BUCKET"),
            object_store_api_key: std::env::var("OBJECT_STORE_API_KEY")
                .expect("OBJECT_STORE_API_KEY"),
            catalog_port: std::env::var("CATALOG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3002),
        }
    }
}
