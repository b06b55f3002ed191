/// Refresh token handler
use actix_web::{web, HttpResponse};

use crate::{
    error::{AuthError, ErrorResponse},
    metrics,
    models::RefreshTokenResponse,
    AppState,
};

/// Issue a fresh session token for a user
#[utoipa::path(
    get,
    path = "/api/v1/auth/refresh-token/{username}",
    tag = "Auth",
    params(("username" = String, Path, description = "Username of the session owner")),
    responses(
        (status = 200, description = "Token refreshed", body = RefreshTokenResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    )
)]
pub async fn token(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse, AuthError> {
    metrics::inc_refresh_token_requests();

    let user = state
        .auth_service
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| AuthError::not_found("User not found", "RefreshToken token() method error"))?;

    let token = state
        .auth_service
        .sign_token(user.id, &user.email, &user.username)?;

    Ok(HttpResponse::Ok().json(RefreshTokenResponse {
        message: "Refresh token".to_string(),
        user,
        token,
    }))
}
