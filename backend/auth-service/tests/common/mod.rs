#![allow(dead_code)]

/// Shared doubles and fixtures for the HTTP integration tests
use async_trait::async_trait;
use chrono::Utc;
use crypto_core::JwtSigner;
use mockall::mock;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use marketplace_auth::{
    db::AuthRepository,
    models::{AuthDocument, NewAuthUser, SignupRequest},
    services::{AuthService, MediaUploader, MessagePublisher, UploadOptions, UploadResult},
    AppState, AuthResult,
};

pub const TEST_SECRET: &str = "test-jwt-secret";
pub const GATEWAY_SECRET: &str = "test-gateway-secret";
pub const CLIENT_URL: &str = "http://localhost:3000";
pub const PICTURE_URL: &str = "https://cdn.example.com/profile-pictures/abc";
pub const PICTURE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

mock! {
    pub Repo {}

    #[async_trait]
    impl AuthRepository for Repo {
        async fn find_by_username(&self, username: &str) -> AuthResult<Option<AuthDocument>>;
        async fn find_by_username_or_email(
            &self,
            username: &str,
            email: &str,
        ) -> AuthResult<Option<AuthDocument>>;
        async fn insert(&self, user: &NewAuthUser, password_hash: &str) -> AuthResult<AuthDocument>;
    }
}

mock! {
    pub Uploader {}

    #[async_trait]
    impl MediaUploader for Uploader {
        async fn upload(&self, file: &str, public_id: &str, options: UploadOptions) -> UploadResult;
    }
}

/// Publisher that records every message it is asked to send
#[derive(Default)]
pub struct RecordingPublisher {
    pub sent: Mutex<Vec<PublishedMessage>>,
    pub fail: bool,
}

#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub exchange: String,
    pub routing_key: String,
    pub message: serde_json::Value,
    pub log_message: String,
}

impl RecordingPublisher {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn on_exchange(&self, exchange: &str) -> Vec<PublishedMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.exchange == exchange)
            .collect()
    }
}

#[async_trait]
impl MessagePublisher for RecordingPublisher {
    async fn publish_direct_message(
        &self,
        exchange: &str,
        routing_key: &str,
        message: &str,
        log_message: &str,
    ) -> AuthResult<()> {
        if self.fail {
            return Err(marketplace_auth::AuthError::Publish(
                "broker unavailable".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(PublishedMessage {
            exchange: exchange.to_string(),
            routing_key: routing_key.to_string(),
            message: serde_json::from_str(message).unwrap(),
            log_message: log_message.to_string(),
        });
        Ok(())
    }
}

pub fn build_state(repo: MockRepo, uploader: MockUploader, publisher: Arc<RecordingPublisher>) -> AppState {
    let auth_service = AuthService::new(
        Arc::new(repo),
        publisher.clone(),
        Arc::new(JwtSigner::from_secret(TEST_SECRET)),
    );

    AppState {
        auth_service: Arc::new(auth_service),
        media_uploader: Arc::new(uploader),
        publisher,
        client_url: CLIENT_URL.to_string(),
    }
}

pub fn signup_request() -> SignupRequest {
    SignupRequest {
        username: "alice".to_string(),
        password: "qwerty".to_string(),
        country: "Norway".to_string(),
        email: "Alice@Example.com".to_string(),
        profile_picture: PICTURE.to_string(),
    }
}

pub fn stored_user(new_user: &NewAuthUser, password_hash: &str) -> AuthDocument {
    AuthDocument {
        id: Uuid::new_v4(),
        username: new_user.username.clone(),
        password: password_hash.to_string(),
        email: new_user.email.clone(),
        country: new_user.country.clone(),
        profile_picture: new_user.profile_picture.clone(),
        profile_public_id: new_user.profile_public_id.clone(),
        email_verification_token: Some(new_user.email_verification_token.clone()),
        email_verified: false,
        created_at: Utc::now(),
        password_reset_token: None,
        password_reset_expires: None,
    }
}

pub fn existing_user(username: &str, email: &str) -> AuthDocument {
    AuthDocument {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        email: email.to_string(),
        country: "Norway".to_string(),
        profile_picture: PICTURE_URL.to_string(),
        profile_public_id: Uuid::new_v4().to_string(),
        email_verification_token: None,
        email_verified: true,
        created_at: Utc::now(),
        password_reset_token: None,
        password_reset_expires: None,
    }
}

/// Uploader that succeeds and echoes the requested public id
pub fn working_uploader() -> MockUploader {
    let mut uploader = MockUploader::new();
    uploader
        .expect_upload()
        .withf(|_, _, options| options.overwrite && options.invalidate)
        .returning(|_, public_id, _| UploadResult {
            public_id: Some(public_id.to_string()),
            secure_url: Some(PICTURE_URL.to_string()),
        });
    uploader
}

/// Gateway token as the api gateway would sign it
pub fn gateway_token(service_id: &str, secret: &str) -> String {
    #[derive(serde::Serialize)]
    struct Claims<'a> {
        id: &'a str,
        iat: i64,
    }

    JwtSigner::from_secret(secret)
        .sign_claims(&Claims {
            id: service_id,
            iat: Utc::now().timestamp(),
        })
        .unwrap()
}
