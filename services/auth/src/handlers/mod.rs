use serde::Serialize;

pub mod account;
pub mod reset;
pub mod verification;

/// Plain success body used by the code-flow endpoints.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
