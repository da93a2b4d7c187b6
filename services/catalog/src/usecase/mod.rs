pub mod authorize;
pub mod cart;
pub mod contact;
pub mod product;
