//! Handler-side extraction of the authenticated principal

use std::fmt;

use actix_web::{
    dev::Payload, http::StatusCode, FromRequest, HttpMessage, HttpRequest, HttpResponse,
    ResponseError,
};
use futures::future::{ready, Ready};
use tracing::warn;

use crate::principal::{BearerCredential, Principal};

/// The dedicated rejection for unauthenticated access to a protected route.
///
/// Its only job is to emit a 401 with a fixed message; the denial itself is
/// logged at the extraction site. Token failure kinds never reach this body.
#[derive(Debug)]
pub struct AuthenticationRequired;

impl fmt::Display for AuthenticationRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unauthorized request detected")
    }
}

impl ResponseError for AuthenticationRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Unauthorized request detected",
            "status": 401,
        }))
    }
}

/// Extracting a [`Principal`] marks a route as requiring authentication:
/// anonymous requests are rejected with the 401 entry point before the
/// handler body runs. Role checks stay in handler logic and answer 403.
impl FromRequest for Principal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Principal>() {
            Some(principal) => ready(Ok(principal.clone())),
            None => {
                warn!(path = %req.path(), "unauthenticated request to protected route");
                ready(Err(AuthenticationRequired.into()))
            }
        }
    }
}

/// Used as `Option<BearerCredential>` by handlers that forward the inbound
/// token on outbound calls; absence is not itself a denial, so nothing is
/// logged here.
impl FromRequest for BearerCredential {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<BearerCredential>() {
            Some(credential) => ready(Ok(credential.clone())),
            None => ready(Err(AuthenticationRequired.into())),
        }
    }
}
