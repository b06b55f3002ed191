use chrono::{DateTime, Utc};
/// Auth user model and request/response payloads
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored user credential record.
///
/// The password hash is never serialized, so the document can be returned
/// to clients as is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthDocument {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    #[schema(write_only)]
    pub password: String,
    pub email: String,
    pub country: String,
    pub profile_picture: String,
    pub profile_public_id: String,
    pub email_verification_token: Option<String>,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTime<Utc>>,
}

/// Insert payload built by the signup handler. `password` is plain text and
/// is hashed by the auth service before it reaches the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub profile_picture: String,
    pub profile_public_id: String,
    pub email_verification_token: String,
}

/// Signup body. Absent fields deserialize to empty strings so that schema
/// validation reports them with its own messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub country: String,
    pub email: String,
    /// Data URI or base64 encoded image
    pub profile_picture: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub user: AuthDocument,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub message: String,
    pub user: AuthDocument,
    pub token: String,
}
