use verdant_catalog::error::CatalogServiceError;
use verdant_catalog::usecase::authorize::AuthorizeRequestUseCase;

use crate::helpers::{MockAccountPort, TEST_JWT_SECRET, bearer, make_token};

fn gate(accounts: MockAccountPort) -> AuthorizeRequestUseCase<MockAccountPort> {
    AuthorizeRequestUseCase {
        accounts,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn should_reject_missing_header_as_unauthenticated() {
    let result = gate(MockAccountPort::new(vec!["user@example.com"]))
        .execute(None)
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::Unauthenticated)),
        "expected Unauthenticated, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_non_bearer_scheme_as_forbidden() {
    let result = gate(MockAccountPort::new(vec!["user@example.com"]))
        .execute(Some("Basic dXNlcjpwdw=="))
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_token_with_distinct_kind() {
    // Well past the 60s validation leeway.
    let token = make_token("user@example.com", TEST_JWT_SECRET, -3600);

    let result = gate(MockAccountPort::new(vec!["user@example.com"]))
        .execute(Some(&bearer(&token)))
        .await;

    // Expired is 401 with its own kind: the client should re-login, not
    // treat this as access denied.
    assert!(
        matches!(result, Err(CatalogServiceError::TokenExpired)),
        "expected TokenExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_bad_signature_as_forbidden() {
    let token = make_token("user@example.com", "some-other-secret", 300);

    let result = gate(MockAccountPort::new(vec!["user@example.com"]))
        .execute(Some(&bearer(&token)))
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_garbage_token_as_forbidden() {
    let result = gate(MockAccountPort::new(vec!["user@example.com"]))
        .execute(Some("Bearer not-a-jwt"))
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_deleted_subject_as_forbidden() {
    // Token is genuine, but the account is gone: outstanding tokens must die
    // with the account.
    let token = make_token("user@example.com", TEST_JWT_SECRET, 300);

    let result = gate(MockAccountPort::empty())
        .execute(Some(&bearer(&token)))
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_attach_identity_for_valid_subject() {
    let token = make_token("user@example.com", TEST_JWT_SECRET, 300);

    let identity = gate(MockAccountPort::new(vec!["user@example.com"]))
        .execute(Some(&bearer(&token)))
        .await
        .unwrap();

    assert_eq!(identity.email, "user@example.com");
}
