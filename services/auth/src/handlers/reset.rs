use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::AuthServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::reset::{
    CompleteResetInput, CompleteResetUseCase, InitiateResetInput, InitiateResetUseCase,
};

// ── POST /forgot-password ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthServiceError> {
    let usecase = InitiateResetUseCase {
        users: state.user_repo(),
        codes: state.verification_repo(),
        mailer: state.mailer(),
    };
    usecase
        .execute(InitiateResetInput { email: body.email })
        .await?;
    Ok(Json(MessageResponse {
        message: "password reset code sent",
    }))
}

// ── POST /reset-password ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthServiceError> {
    let usecase = CompleteResetUseCase {
        users: state.user_repo(),
        codes: state.verification_repo(),
    };
    usecase
        .execute(CompleteResetInput {
            email: body.email,
            code: body.code,
            new_password: body.new_password,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "password updated successfully",
    }))
}
