// Marketplace Auth Service Library

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod services;
pub mod telemetry;
pub mod utils;
pub mod validators;


use std::sync::Arc;

pub use error::{AuthError, AuthResult};

use services::{AuthService, MediaUploader, MessagePublisher};

/// Collaborators shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub media_uploader: Arc<dyn MediaUploader>,
    pub publisher: Arc<dyn MessagePublisher>,
    /// Frontend origin used in verification links
    pub client_url: String,
}
