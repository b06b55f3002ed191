/// Route definitions and middleware setup
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use utoipa::OpenApi;

use crate::{
    error::AuthError, handlers, metrics, middleware::GatewayAuthMiddleware, openapi::ApiDoc,
};

/// Profile pictures travel inline as base64
const JSON_PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn configure(gateway: GatewayAuthMiddleware) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config())
            .route("/auth-health", web::get().to(handlers::health))
            .route("/metrics", web::get().to(metrics::metrics_handler))
            .route("/api/v1/openapi.json", web::get().to(openapi_json))
            .service(
                web::scope("/api/v1/auth")
                    .wrap(gateway)
                    .route("/signup", web::post().to(handlers::create))
                    .route("/refresh-token/{username}", web::get().to(handlers::token)),
            );
    }
}

/// Malformed JSON bodies are reported in the service error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AuthError::bad_request(err.to_string(), "JSON payload error").into()
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
