//! Token claims, validation, and request identity shared by the Verdant
//! services. The auth service issues tokens; everything else only validates.

pub mod identity;
pub mod token;
