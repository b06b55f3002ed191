use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{AuthDocument, RefreshTokenResponse, SignupRequest, SignupResponse};

/// OpenAPI document for the auth REST endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::signup::create,
        crate::handlers::refresh_token::token
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        RefreshTokenResponse,
        AuthDocument,
        ErrorResponse
    )),
    tags(
        (name = "Auth", description = "Signup & token APIs")
    )
)]
pub struct ApiDoc;
