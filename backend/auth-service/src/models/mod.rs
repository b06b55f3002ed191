/// Data models for the credential store
pub mod auth;

pub use auth::{AuthDocument, NewAuthUser, RefreshTokenResponse, SignupRequest, SignupResponse};
