//! Admin API authentication
//!
//! Turns a Ghost Admin API key into the short-lived JWT sent with every
//! request. Signing is pure; the clock is the only input besides the key.

pub mod errors;
pub mod signer;

pub use errors::AuthError;
pub use signer::{split_credential, AdminClaims, SignedToken, TokenSigner};
