/// Credential store operations used by the HTTP handlers
use crate::db::AuthRepository;
use crate::error::{AuthError, AuthResult};
use crate::models::{AuthDocument, NewAuthUser};
use crate::security::password;
use crate::services::publisher::MessagePublisher;
use crate::utils::{first_letter_uppercase, lowercase};
use crypto_core::JwtSigner;
use event_schema::routing::{BUYER_UPDATE_EXCHANGE, USER_BUYER_ROUTING_KEY};
use event_schema::AuthBuyerMessageDetails;
use std::sync::Arc;
use uuid::Uuid;

/// Issues session tokens for authenticated users
pub trait TokenSigner: Send + Sync {
    fn sign_token(&self, id: Uuid, email: &str, username: &str) -> AuthResult<String>;
}

impl TokenSigner for JwtSigner {
    fn sign_token(&self, id: Uuid, email: &str, username: &str) -> AuthResult<String> {
        Ok(self.sign(id, email, username)?)
    }
}

pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
    publisher: Arc<dyn MessagePublisher>,
    signer: Arc<dyn TokenSigner>,
}

impl AuthService {
    pub fn new(
        repo: Arc<dyn AuthRepository>,
        publisher: Arc<dyn MessagePublisher>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            repo,
            publisher,
            signer,
        }
    }

    pub async fn get_user_by_username(&self, username: &str) -> AuthResult<Option<AuthDocument>> {
        self.repo
            .find_by_username(&first_letter_uppercase(username))
            .await
    }

    pub async fn get_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AuthResult<Option<AuthDocument>> {
        self.repo
            .find_by_username_or_email(&first_letter_uppercase(username), &lowercase(email))
            .await
    }

    /// Store a new user and seed the buyer profile
    pub async fn create_auth_user(&self, new_user: NewAuthUser) -> AuthResult<AuthDocument> {
        let password_hash = password::hash_password(&new_user.password)?;
        let created = self.repo.insert(&new_user, &password_hash).await?;

        let buyer = AuthBuyerMessageDetails::new(
            created.username.as_str(),
            created.email.as_str(),
            created.profile_picture.as_str(),
            created.country.as_str(),
            created.created_at,
        );
        let payload = serde_json::to_string(&buyer)
            .map_err(|e| AuthError::Internal(format!("Failed to serialize buyer message: {}", e)))?;

        self.publisher
            .publish_direct_message(
                BUYER_UPDATE_EXCHANGE,
                USER_BUYER_ROUTING_KEY,
                &payload,
                "Buyer details sent to buyer service.",
            )
            .await?;

        tracing::info!(user_id = %created.id, "auth user created");
        Ok(created)
    }

    pub fn sign_token(&self, id: Uuid, email: &str, username: &str) -> AuthResult<String> {
        self.signer.sign_token(id, email, username)
    }
}
