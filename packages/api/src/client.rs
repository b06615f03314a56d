//! # HTTP client core
//!
//! [`ApiClient`] owns the `reqwest` client and the API origin. Endpoint methods
//! live next to their models ([`crate::auth`], [`crate::plants`]); this module
//! only knows how to build requests and how to turn a response into either an
//! [`Envelope`] or an [`ApiError`].
//!
//! ## Response classification
//!
//! | Response | Result |
//! |----------|--------|
//! | 401 / 403 | [`ApiError::Unauthorized`] |
//! | 409, or a known duplicate message | [`ApiError::Conflict`] |
//! | other non-2xx | [`ApiError::Rejected`] |
//! | 2xx with `success: false` | [`ApiError::Rejected`] |
//! | 2xx otherwise | `Ok(Envelope)` |
//!
//! Login and signup read the raw envelope instead, because their outcome is
//! decided by body content as well as status.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::{Token, TOKEN_HEADER};
use crate::envelope::Envelope;
use crate::error::ApiError;

/// Client for the plant-catalog API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client for `base_url` with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, 30)
    }

    /// Client configured from `dashboard.toml`.
    pub fn from_config(config: &store::DashboardConfig) -> Self {
        Self::with_timeout(config.base_url(), config.api.request_timeout_secs)
    }

    /// `timeout_secs` applies to native builds; 0 disables it. Browsers enforce
    /// their own limits on `fetch`.
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: build_http(timeout_secs),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Unauthenticated request.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        self.http.request(method, self.url(path))
    }

    /// Request carrying the raw token in the custom `token` header (plant endpoints).
    pub(crate) fn token_request(&self, method: Method, path: &str, token: &Token) -> RequestBuilder {
        self.request(method, path)
            .header(TOKEN_HEADER, token.as_str())
    }

    /// Request carrying `Authorization: Bearer <token>` (profile endpoints).
    pub(crate) fn bearer_request(
        &self,
        method: Method,
        path: &str,
        token: &Token,
    ) -> RequestBuilder {
        self.request(method, path).bearer_auth(token.as_str())
    }

    /// Send and decode the envelope without judging the outcome.
    pub(crate) async fn send_raw<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Envelope<T>), ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed: {}", e);
            ApiError::Transport(e)
        })?;
        let status = response.status();
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok((status, Envelope::default()));
        }

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => Ok((status, envelope)),
            Err(e) if status.is_success() => {
                tracing::warn!("Undecodable {} response: {}", status, e);
                Err(ApiError::Decode(e.to_string()))
            }
            // Error pages are often HTML; the status alone classifies them
            Err(_) => Ok((status, Envelope::default())),
        }
    }

    /// Send, decode, and classify the response.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let (status, envelope) = self.send_raw(request).await?;
        classify(status, envelope)
    }
}

/// Map a status and envelope onto the error taxonomy.
pub(crate) fn classify<T>(status: StatusCode, envelope: Envelope<T>) -> Result<Envelope<T>, ApiError> {
    let code = status.as_u16();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::warn!("Server rejected session ({})", code);
        return Err(ApiError::Unauthorized {
            status: code,
            message: envelope.message,
        });
    }
    if status == StatusCode::CONFLICT || envelope.is_conflict() {
        return Err(ApiError::Conflict(
            envelope.message.unwrap_or_else(|| "already exists".to_string()),
        ));
    }
    if !status.is_success() || envelope.is_flagged_failure() {
        tracing::warn!(
            "Request rejected ({}): {}",
            code,
            envelope.message.as_deref().unwrap_or("-")
        );
        return Err(ApiError::Rejected {
            status: code,
            message: envelope.message,
        });
    }
    Ok(envelope)
}

// The browser fetch backend has no client-wide timeout
#[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
fn build_http(timeout_secs: u64) -> reqwest::Client {
    let builder = reqwest::Client::builder();

    #[cfg(not(target_arch = "wasm32"))]
    let builder = if timeout_secs > 0 {
        builder.timeout(std::time::Duration::from_secs(timeout_secs))
    } else {
        builder
    };

    builder.build().unwrap_or_else(|e| {
        tracing::error!("Failed to configure HTTP client, using defaults: {}", e);
        reqwest::Client::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(success: Option<bool>, message: Option<&str>) -> Envelope<()> {
        Envelope {
            success,
            message: message.map(str::to_string),
            data: None,
            token: None,
        }
    }

    #[test]
    fn test_classify_statuses() {
        assert!(classify(StatusCode::OK, env(None, None)).is_ok());
        assert!(classify(StatusCode::CREATED, env(Some(true), Some("added"))).is_ok());

        assert!(matches!(
            classify(StatusCode::UNAUTHORIZED, env(None, Some("jwt expired"))),
            Err(ApiError::Unauthorized { status: 401, .. })
        ));
        assert!(matches!(
            classify(StatusCode::FORBIDDEN, env(None, None)),
            Err(ApiError::Unauthorized { status: 403, .. })
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, env(None, None)),
            Err(ApiError::Rejected { status: 500, .. })
        ));
    }

    #[test]
    fn test_classify_body_level_failures() {
        assert!(matches!(
            classify(StatusCode::OK, env(Some(false), Some("not found"))),
            Err(ApiError::Rejected { status: 200, message: Some(m) }) if m == "not found"
        ));
        assert!(matches!(
            classify(StatusCode::BAD_REQUEST, env(None, Some("plant already exist"))),
            Err(ApiError::Conflict(m)) if m == "plant already exist"
        ));
    }

    #[test]
    fn test_base_url_is_normalised() {
        let client = ApiClient::new("https://plants.example/");
        assert_eq!(client.url("/plant"), "https://plants.example/plant");
    }
}
