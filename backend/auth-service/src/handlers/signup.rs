/// Signup handler
use actix_web::{web, HttpResponse};
use crypto_core::token::{random_hex_token, VERIFICATION_TOKEN_BYTES};
use event_schema::routing::{AUTH_EMAIL_ROUTING_KEY, EMAIL_NOTIFICATION_EXCHANGE};
use event_schema::EmailMessageDetails;
use uuid::Uuid;

use crate::{
    db::auth_repo::DUPLICATE_CREDENTIALS,
    error::{AuthError, ErrorResponse},
    metrics,
    models::{NewAuthUser, SignupRequest, SignupResponse},
    services::UploadOptions,
    utils::{first_letter_uppercase, lowercase},
    validators, AppState,
};

pub const SIGNUP_CONTEXT: &str = "SignUp create() method error";

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Invalid input or credentials taken", body = ErrorResponse)
    )
)]
pub async fn create(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AuthError> {
    metrics::inc_signup_requests();

    let result = signup(&state, payload.into_inner()).await;
    if result.is_err() {
        metrics::inc_signup_failures();
    }
    result
}

async fn signup(state: &AppState, payload: SignupRequest) -> Result<HttpResponse, AuthError> {
    validators::validate_signup(&payload)
        .map_err(|message| AuthError::bad_request(message, SIGNUP_CONTEXT))?;

    let SignupRequest {
        username,
        password,
        country,
        email,
        profile_picture,
    } = payload;

    let existing = state
        .auth_service
        .get_user_by_username_or_email(&username, &email)
        .await?;
    if existing.is_some() {
        return Err(AuthError::bad_request(DUPLICATE_CREDENTIALS, SIGNUP_CONTEXT));
    }

    let profile_public_id = Uuid::new_v4().to_string();
    let upload = state
        .media_uploader
        .upload(
            &profile_picture,
            &profile_public_id,
            UploadOptions {
                overwrite: true,
                invalidate: true,
            },
        )
        .await;
    let (Some(profile_public_id), Some(profile_picture)) = (upload.public_id, upload.secure_url)
    else {
        return Err(AuthError::bad_request(
            "File upload error. Try again",
            SIGNUP_CONTEXT,
        ));
    };

    let email_verification_token = random_hex_token(VERIFICATION_TOKEN_BYTES);
    let new_user = NewAuthUser {
        username: first_letter_uppercase(&username),
        email: lowercase(&email),
        password,
        country,
        profile_picture,
        profile_public_id,
        email_verification_token: email_verification_token.clone(),
    };
    let user = state.auth_service.create_auth_user(new_user).await?;

    let verify_link = format!(
        "{}/confirm_email?v_token={}",
        state.client_url.trim_end_matches('/'),
        email_verification_token
    );
    let message = EmailMessageDetails::verify_email(user.email.as_str(), verify_link);
    let payload = serde_json::to_string(&message)
        .map_err(|e| AuthError::Internal(format!("Failed to serialize email message: {}", e)))?;
    state
        .publisher
        .publish_direct_message(
            EMAIL_NOTIFICATION_EXCHANGE,
            AUTH_EMAIL_ROUTING_KEY,
            &payload,
            "Verify email message has been sent to notification service.",
        )
        .await?;

    let token = state
        .auth_service
        .sign_token(user.id, &user.email, &user.username)?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User created successfully".to_string(),
        user,
        token,
    }))
}
