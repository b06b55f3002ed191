use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use crypto_core::JwtSigner;
use futures::future::{ready, Ready};
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::AuthError;

pub const GATEWAY_TOKEN_HEADER: &str = "gatewaytoken";

/// Service ids the api gateway signs requests for
pub const GATEWAY_SERVICE_IDS: [&str; 8] = [
    "auth", "seller", "gig", "search", "buyer", "message", "order", "review",
];

#[derive(Debug, Deserialize)]
struct GatewayClaims {
    id: String,
}

/// Rejects requests that were not forwarded by the api gateway.
///
/// With no signer configured every request passes through.
#[derive(Clone)]
pub struct GatewayAuthMiddleware {
    signer: Option<Arc<JwtSigner>>,
}

impl GatewayAuthMiddleware {
    pub fn new(signer: Option<Arc<JwtSigner>>) -> Self {
        Self { signer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for GatewayAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = GatewayAuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GatewayAuthMiddlewareService {
            service: Rc::new(service),
            signer: self.signer.clone(),
        }))
    }
}

pub struct GatewayAuthMiddlewareService<S> {
    service: Rc<S>,
    signer: Option<Arc<JwtSigner>>,
}

impl<S, B> Service<ServiceRequest> for GatewayAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let signer = self.signer.clone();

        Box::pin(async move {
            if let Some(signer) = signer {
                verify_gateway_request(&req, &signer)?;
            }
            service.call(req).await
        })
    }
}

fn verify_gateway_request(req: &ServiceRequest, signer: &JwtSigner) -> Result<(), AuthError> {
    let token = req
        .headers()
        .get(GATEWAY_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AuthError::unauthorized(
                "Invalid request",
                "verifyGatewayRequest() method: Request not coming from api gateway",
            )
        })?;

    let claims: GatewayClaims = signer.verify(token).map_err(|e| {
        tracing::warn!("gateway token validation failed: {}", e);
        AuthError::unauthorized(
            "Invalid request",
            "verifyGatewayRequest() method: Request not coming from api gateway",
        )
    })?;

    if !GATEWAY_SERVICE_IDS.contains(&claims.id.as_str()) {
        return Err(AuthError::unauthorized(
            "Invalid request",
            "verifyGatewayRequest() method: Request payload is invalid",
        ));
    }

    Ok(())
}
