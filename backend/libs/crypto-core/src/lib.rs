//! Shared cryptographic helpers for marketplace services.
//!
//! - [`jwt`]: session token signing and verification with keys owned by the caller
//! - [`token`]: random opaque tokens (email verification, password reset)

pub mod jwt;
pub mod token;

pub use jwt::{JwtSigner, SessionClaims, SignerError};
pub use token::random_hex_token;
