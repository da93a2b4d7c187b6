use sea_orm::Database;
use tracing::info;

use verdant_auth::config::AuthConfig;
use verdant_auth::infra::mailer::HttpMailer;
use verdant_auth::router::build_router;
use verdant_auth::state::AppState;
use verdant_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = HttpMailer {
        client: reqwest::Client::new(),
        api_url: config.mail_api_url,
        api_key: config.mail_api_key,
        from_address: config.mail_from,
    };

    let state = AppState {
        db,
        mailer,
        jwt_secret: config.jwt_secret,
        token_ttl_secs: config.token_ttl_secs,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
