use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::authorize::AuthorizeRequestUseCase;

/// Request gate applied to the mutating catalog routes. On success the
/// decoded subject is attached to request extensions for downstream
/// handlers; there are no other side effects.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, CatalogServiceError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let usecase = AuthorizeRequestUseCase {
        accounts: state.account_port(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let identity = usecase.execute(header.as_deref()).await?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
