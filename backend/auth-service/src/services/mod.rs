/// Business logic services
pub mod auth_service;
pub mod media;
pub mod publisher;

pub use auth_service::{AuthService, TokenSigner};
pub use media::{MediaUploader, ObjectStore, S3MediaUploader, UploadOptions, UploadResult};
pub use publisher::{KafkaMessagePublisher, MessagePublisher};
