/// HTTP middleware
pub mod gateway_auth;

pub use gateway_auth::GatewayAuthMiddleware;
