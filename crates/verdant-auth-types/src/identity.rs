//! Request identity attached by the catalog request gate.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

/// Authenticated subject, inserted into request extensions by the gate
/// middleware after token validation and the credential-store re-check.
///
/// Extraction returns 401 if no identity is attached (the route was not
/// behind the gate, or the gate rejected the request).
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
