use verdant_auth_types::identity::Identity;
use verdant_auth_types::token::{AuthError, validate_access_token};

use crate::domain::repository::AccountPort;
use crate::error::CatalogServiceError;

/// Decides protected requests from the raw `Authorization` header value.
///
/// Missing credentials are 401. Anything presented but unacceptable is 403,
/// except a genuine token that has merely expired, which is 401 with its own
/// kind so clients know to re-login rather than give up.
pub struct AuthorizeRequestUseCase<A: AccountPort> {
    pub accounts: A,
    pub jwt_secret: String,
}

impl<A: AccountPort> AuthorizeRequestUseCase<A> {
    pub async fn execute(
        &self,
        auth_header: Option<&str>,
    ) -> Result<Identity, CatalogServiceError> {
        let header = auth_header.ok_or(CatalogServiceError::Unauthenticated)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(CatalogServiceError::Forbidden)?;

        let info = validate_access_token(token, &self.jwt_secret).map_err(|e| match e {
            AuthError::Expired => CatalogServiceError::TokenExpired,
            AuthError::InvalidSignature | AuthError::Malformed => CatalogServiceError::Forbidden,
        })?;

        // Tokens are stateless, but deleting an account must revoke them
        // without waiting for expiry: the subject has to still exist.
        if !self.accounts.email_exists(&info.email).await? {
            return Err(CatalogServiceError::Forbidden);
        }

        Ok(Identity { email: info.email })
    }
}
