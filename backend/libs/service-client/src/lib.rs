//! HTTP client for inter-service lookups on the caller's behalf
//!
//! Services consult each other's read endpoints to check that a referenced
//! entity exists. Trust propagates by forwarding the caller's own bearer
//! token: there is no service-to-service secret, and the callee re-verifies the
//! same user token independently.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Fetches entity projections from one sibling service.
///
/// The outcome is deliberately binary: `Some(projection)` on a 2xx response
/// with a deserializable body, `None` on anything else. A 404, a 5xx, a
/// connection failure, or an unreadable body all mean "absent". Callers must
/// not distinguish "does not exist" from "unreachable"; keeping that
/// collapsed keeps every command handler's rejection path identical.
pub struct EntityClient {
    client: Client,
    base_url: String,
    service_name: String,
}

impl EntityClient {
    /// `base_url` without a trailing slash; `service_name` is only used in
    /// log lines.
    pub fn new(service_name: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_name: service_name.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base-url><path>` and deserialize the body.
    ///
    /// When `bearer` is present it is forwarded as `Authorization: Bearer`;
    /// when absent the request carries no Authorization header at all and
    /// the callee decides whether the route is public. The request uses the
    /// client's default timeout behavior; no retry, no circuit breaker.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Option<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(service = %self.service_name, %url, "fetching entity projection");

        let mut request = self.client.get(&url);
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        } else {
            warn!(
                service = %self.service_name,
                %url,
                "no bearer token on inbound request, calling without Authorization header"
            );
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(service = %self.service_name, %url, error = %err, "entity lookup failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                service = %self.service_name,
                %url,
                status = %status,
                "entity lookup returned non-success status"
            );
            return None;
        }

        match response.json::<T>().await {
            Ok(projection) => {
                info!(service = %self.service_name, %url, "entity projection fetched");
                Some(projection)
            }
            Err(err) => {
                warn!(
                    service = %self.service_name,
                    %url,
                    error = %err,
                    "entity projection body could not be read"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = EntityClient::new("vehicles-service", "http://localhost:8081/");
        assert_eq!(client.base_url(), "http://localhost:8081");
    }
}
