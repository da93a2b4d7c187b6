use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::AuthServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::verification::{
    SendVerificationInput, SendVerificationOutput, SendVerificationUseCase, VerifyCodeInput,
    VerifyCodeUseCase,
};

// ── POST /send-verification-email ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendVerificationRequest {
    pub email: String,
}

pub async fn send_verification_email(
    State(state): State<AppState>,
    Json(body): Json<SendVerificationRequest>,
) -> Result<Json<MessageResponse>, AuthServiceError> {
    let usecase = SendVerificationUseCase {
        users: state.user_repo(),
        codes: state.verification_repo(),
        mailer: state.mailer(),
    };
    let message = match usecase
        .execute(SendVerificationInput { email: body.email })
        .await?
    {
        SendVerificationOutput::Sent => "verification code sent",
        SendVerificationOutput::AlreadyRegistered => "user already exists",
    };
    Ok(Json(MessageResponse { message }))
}

// ── POST /verify-code ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

pub async fn verify_code(
    State(state): State<AppState>,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<Json<MessageResponse>, AuthServiceError> {
    let usecase = VerifyCodeUseCase {
        codes: state.verification_repo(),
    };
    usecase
        .execute(VerifyCodeInput {
            email: body.email,
            code: body.code,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "email verified successfully",
    }))
}
