/// HTTP request handlers (REST API)
pub mod health;
pub mod refresh_token;
pub mod signup;

pub use health::health;
pub use refresh_token::token;
pub use signup::create;
