/// Gateway request verification and public endpoints
mod common;

use actix_web::{http::StatusCode, test, web, App};
use crypto_core::JwtSigner;
use std::sync::Arc;

use common::*;
use marketplace_auth::{middleware::GatewayAuthMiddleware, routes};

fn gateway() -> GatewayAuthMiddleware {
    GatewayAuthMiddleware::new(Some(Arc::new(JwtSigner::from_secret(GATEWAY_SECRET))))
}

fn repo_with_alice() -> MockRepo {
    let mut repo = MockRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(existing_user("Alice", "alice@example.com"))));
    repo
}

#[actix_web::test]
async fn request_without_gateway_token_is_rejected() {
    let state = build_state(
        MockRepo::new(),
        MockUploader::new(),
        Arc::new(RecordingPublisher::default()),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure(gateway())),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/refresh-token/alice")
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid request");
    assert_eq!(
        body["comingFrom"],
        "verifyGatewayRequest() method: Request not coming from api gateway"
    );
}

#[actix_web::test]
async fn request_with_valid_gateway_token_passes() {
    let state = build_state(
        repo_with_alice(),
        MockUploader::new(),
        Arc::new(RecordingPublisher::default()),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure(gateway())),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/refresh-token/alice")
            .insert_header(("gatewayToken", gateway_token("auth", GATEWAY_SECRET)))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn gateway_token_with_unknown_service_id_is_rejected() {
    let state = build_state(
        MockRepo::new(),
        MockUploader::new(),
        Arc::new(RecordingPublisher::default()),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure(gateway())),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/refresh-token/alice")
            .insert_header(("gatewayToken", gateway_token("billing", GATEWAY_SECRET)))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["comingFrom"],
        "verifyGatewayRequest() method: Request payload is invalid"
    );
}

#[actix_web::test]
async fn gateway_token_signed_with_other_secret_is_rejected() {
    let state = build_state(
        MockRepo::new(),
        MockUploader::new(),
        Arc::new(RecordingPublisher::default()),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure(gateway())),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/refresh-token/alice")
            .insert_header(("gatewayToken", gateway_token("auth", "wrong-secret")))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn health_metrics_and_openapi_skip_gateway() {
    let state = build_state(
        MockRepo::new(),
        MockUploader::new(),
        Arc::new(RecordingPublisher::default()),
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure(gateway())),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/auth-health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"Auth service is healthy and OK.");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/openapi.json").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = test::read_body_json(resp).await;
    assert!(doc["paths"].get("/api/v1/auth/signup").is_some());
    assert!(doc["paths"]
        .get("/api/v1/auth/refresh-token/{username}")
        .is_some());
}
