//! Per-request bearer authentication filter

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage,
};
use auth_core::TokenVerifier;
use futures::future::{ready, Ready};
use tracing::warn;

use crate::principal::{BearerCredential, Principal};

const BEARER_PREFIX: &str = "Bearer ";

/// Bearer authentication middleware.
///
/// Evaluated once per inbound request, before any handler:
///
/// 1. No `Authorization` header, or one without the `Bearer ` prefix:
///    the request proceeds anonymous.
/// 2. Credential present but untrusted: logged, and the request proceeds
///    anonymous; routes that need authentication reject at extraction time.
/// 3. Credential verified: a [`Principal`] is installed for the rest of
///    the request.
///
/// The raw credential is kept in the extensions whenever the header is
/// well-formed, valid or not, so outbound calls forward exactly what came
/// in. The filter itself never produces an error response.
pub struct BearerAuth {
    verifier: Arc<TokenVerifier>,
}

impl BearerAuth {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = BearerAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            verifier: self.verifier.clone(),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
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
        let verifier = self.verifier.clone();

        Box::pin(async move {
            authenticate(&verifier, &req);
            service.call(req).await
        })
    }
}

fn authenticate(verifier: &TokenVerifier, req: &ServiceRequest) {
    let Some(token) = bearer_token(req) else {
        return;
    };

    // Keep the raw credential for outbound forwarding regardless of whether
    // it verifies; the callee re-verifies independently.
    req.extensions_mut()
        .insert(BearerCredential::new(token.clone()));

    if !verifier.verify(&token) {
        warn!(
            path = %req.path(),
            "bearer credential rejected, request continues unauthenticated"
        );
        return;
    }

    match verifier.claims_of(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(Principal::from_claims(&claims));
        }
        Err(err) => {
            // Unreachable after a successful verify; treated as an invalid
            // credential rather than surfacing a 500.
            warn!(error = %err, "could not read claims from verified token");
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::to_owned)
}
