use verdant_auth::domain::types::CodePurpose;
use verdant_auth::error::AuthServiceError;
use verdant_auth::usecase::verification::{
    SendVerificationInput, SendVerificationOutput, SendVerificationUseCase, VerifyCodeInput,
    VerifyCodeUseCase, generate_code,
};

use crate::helpers::{
    FailingMailer, MockMailer, MockUserRepo, MockVerificationRepo, test_code_entry, test_user,
};

// ── generate_code ────────────────────────────────────────────────────────────

#[test]
fn should_generate_six_digit_codes_in_range() {
    for _ in 0..256 {
        let code = generate_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()), "{code}");
        let value: u32 = code.parse().unwrap();
        assert!((100_000..=999_999).contains(&value), "{value}");
    }
}

// ── SendVerificationUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_store_and_dispatch_code_for_new_email() {
    let codes = MockVerificationRepo::empty();
    let mailer = MockMailer::default();
    let usecase = SendVerificationUseCase {
        users: MockUserRepo::empty(),
        codes: codes.clone(),
        mailer: mailer.clone(),
    };

    let out = usecase
        .execute(SendVerificationInput {
            email: "new@example.com".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(out, SendVerificationOutput::Sent);

    let entry = codes.stored("new@example.com", CodePurpose::Signup).unwrap();
    assert!(!entry.is_expired());
    assert_eq!(entry.code.len(), 6);

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "new@example.com");
    assert!(sent[0].body.contains(&entry.code));
}

#[tokio::test]
async fn should_short_circuit_for_registered_email_without_sending() {
    let codes = MockVerificationRepo::empty();
    let mailer = MockMailer::default();
    let usecase = SendVerificationUseCase {
        users: MockUserRepo::new(vec![test_user("user@example.com", "pw")]),
        codes: codes.clone(),
        mailer: mailer.clone(),
    };

    let out = usecase
        .execute(SendVerificationInput {
            email: "user@example.com".to_owned(),
        })
        .await
        .unwrap();

    // Existing account is a success variant, not an error, and no code
    // leaves the system.
    assert_eq!(out, SendVerificationOutput::AlreadyRegistered);
    assert!(codes.codes.lock().unwrap().is_empty());
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_overwrite_prior_code_on_reissue() {
    let codes = MockVerificationRepo::empty();
    let mailer = MockMailer::default();
    let usecase = SendVerificationUseCase {
        users: MockUserRepo::empty(),
        codes: codes.clone(),
        mailer: mailer.clone(),
    };

    for _ in 0..2 {
        usecase
            .execute(SendVerificationInput {
                email: "new@example.com".to_owned(),
            })
            .await
            .unwrap();
    }

    // One live entry, matching the most recent dispatch.
    let stored = codes.codes.lock().unwrap();
    assert_eq!(stored.len(), 1);
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent[1].body.contains(&stored[0].code));
}

#[tokio::test]
async fn should_surface_delivery_failure() {
    let usecase = SendVerificationUseCase {
        users: MockUserRepo::empty(),
        codes: MockVerificationRepo::empty(),
        mailer: FailingMailer,
    };

    let result = usecase
        .execute(SendVerificationInput {
            email: "new@example.com".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::Delivery)),
        "expected Delivery, got {result:?}"
    );
}

// ── VerifyCodeUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_consume_code_and_record_verified_email() {
    let codes = MockVerificationRepo::new(vec![test_code_entry(
        "new@example.com",
        CodePurpose::Signup,
        "123456",
        600,
    )]);
    let usecase = VerifyCodeUseCase {
        codes: codes.clone(),
    };

    usecase
        .execute(VerifyCodeInput {
            email: "new@example.com".to_owned(),
            code: "123456".to_owned(),
        })
        .await
        .unwrap();

    // Entry consumed (single use), address recorded as verified.
    assert!(codes.stored("new@example.com", CodePurpose::Signup).is_none());
    assert_eq!(
        codes.verified.lock().unwrap().as_slice(),
        ["new@example.com"]
    );
}

#[tokio::test]
async fn should_reject_mismatched_code_and_keep_entry() {
    let codes = MockVerificationRepo::new(vec![test_code_entry(
        "new@example.com",
        CodePurpose::Signup,
        "123456",
        600,
    )]);
    let usecase = VerifyCodeUseCase {
        codes: codes.clone(),
    };

    let result = usecase
        .execute(VerifyCodeInput {
            email: "new@example.com".to_owned(),
            code: "000000".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::CodeMismatch)),
        "expected CodeMismatch, got {result:?}"
    );
    assert!(codes.stored("new@example.com", CodePurpose::Signup).is_some());
    assert!(codes.verified.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_expired_code_on_every_attempt() {
    let codes = MockVerificationRepo::new(vec![test_code_entry(
        "new@example.com",
        CodePurpose::Signup,
        "123456",
        -1,
    )]);
    let usecase = VerifyCodeUseCase {
        codes: codes.clone(),
    };

    for _ in 0..2 {
        let result = usecase
            .execute(VerifyCodeInput {
                email: "new@example.com".to_owned(),
                code: "123456".to_owned(),
            })
            .await;
        assert!(
            matches!(result, Err(AuthServiceError::CodeExpired)),
            "expected CodeExpired, got {result:?}"
        );
    }

    // Lazy expiry: the dead entry is left in place until overwritten.
    assert!(codes.stored("new@example.com", CodePurpose::Signup).is_some());
}

#[tokio::test]
async fn should_reject_code_when_none_was_issued() {
    let usecase = VerifyCodeUseCase {
        codes: MockVerificationRepo::empty(),
    };

    let result = usecase
        .execute(VerifyCodeInput {
            email: "new@example.com".to_owned(),
            code: "123456".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::CodeMismatch)),
        "expected CodeMismatch, got {result:?}"
    );
}
