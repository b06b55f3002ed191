use chrono::{DateTime, Utc};
/// Message contracts exchanged between marketplace services
///
/// Payloads are serialized as camelCase JSON so that services written against
/// the same broker contracts can decode them without a shared crate.
use serde::{Deserialize, Serialize};

/// Exchanges (Kafka topics) and routing keys (record keys)
pub mod routing {
    pub const EMAIL_NOTIFICATION_EXCHANGE: &str = "jobber-email-notification";
    pub const AUTH_EMAIL_ROUTING_KEY: &str = "auth-email";

    pub const BUYER_UPDATE_EXCHANGE: &str = "jobber-buyer-update";
    pub const USER_BUYER_ROUTING_KEY: &str = "user-buyer";
}

/// Notification service templates
pub mod templates {
    pub const VERIFY_EMAIL: &str = "verifyEmail";
}

// ============================================================================
// NOTIFICATION SERVICE MESSAGES
// ============================================================================

/// Email request consumed by the notification service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessageDetails {
    pub receiver_email: String,
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

impl EmailMessageDetails {
    /// Account verification email pointing at `verify_link`
    pub fn verify_email(receiver_email: impl Into<String>, verify_link: impl Into<String>) -> Self {
        Self {
            receiver_email: receiver_email.into(),
            template: templates::VERIFY_EMAIL.to_string(),
            verify_link: Some(verify_link.into()),
            ..Default::default()
        }
    }
}

// ============================================================================
// BUYER SERVICE MESSAGES
// ============================================================================

/// Buyer profile seed sent when a user account is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthBuyerMessageDetails {
    pub username: String,
    pub email: String,
    pub profile_picture: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AuthBuyerMessageDetails {
    pub const KIND: &'static str = "auth";

    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        profile_picture: impl Into<String>,
        country: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            profile_picture: profile_picture.into(),
            country: country.into(),
            created_at,
            kind: Self::KIND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_email_serializes_camel_case() {
        let msg = EmailMessageDetails::verify_email(
            "bob@example.com",
            "http://localhost:3000/confirm_email?v_token=abc",
        );
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["receiverEmail"], "bob@example.com");
        assert_eq!(json["template"], "verifyEmail");
        assert_eq!(
            json["verifyLink"],
            "http://localhost:3000/confirm_email?v_token=abc"
        );
        assert!(json.get("resetLink").is_none());
        assert!(json.get("otp").is_none());
    }

    #[test]
    fn test_buyer_message_has_auth_type() {
        let msg = AuthBuyerMessageDetails::new(
            "Bob",
            "bob@example.com",
            "https://cdn.example.com/p.png",
            "Germany",
            Utc::now(),
        );
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["type"], "auth");
        assert_eq!(json["profilePicture"], "https://cdn.example.com/p.png");
        assert!(json.get("createdAt").is_some());
    }
}
