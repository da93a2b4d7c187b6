use serde::Serialize;

pub mod cart;
pub mod contact;
pub mod product;

/// Plain success body.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
