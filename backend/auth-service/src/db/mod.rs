/// Database access for the credential store
pub mod auth_repo;

pub use auth_repo::{AuthRepository, PgAuthRepository};
