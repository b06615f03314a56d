//! Login, signup, and email verification.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::{Acknowledged, Token};
use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct EmailBody<'a> {
    pub(crate) email: &'a str,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// What a signup attempt produced.
#[derive(Clone, Debug, PartialEq)]
pub enum SignupOutcome {
    /// Account created. The service may already hand out a session token.
    Created {
        token: Option<Token>,
        message: Option<String>,
    },
    /// An account with this email exists; the caller should resend the
    /// verification mail instead.
    AlreadyExists,
}

impl ApiClient {
    /// `POST /auth/login`. Returns the session token when the response grants one.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        let request = self.request(Method::POST, "/auth/login").json(&Credentials {
            email: email.trim(),
            password,
        });
        let (status, envelope) = self.send_raw::<Value>(request).await?;

        if status.is_success() && envelope.grants_session() {
            if let Some(token) = envelope.session_token().and_then(|t| Token::new(t)) {
                tracing::info!("Login accepted");
                return Ok(token);
            }
        }

        tracing::warn!("Login refused ({})", status.as_u16());
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        })
    }

    /// `POST /auth/signup`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupOutcome, ApiError> {
        let http = self.request(Method::POST, "/auth/signup").json(request);
        let (status, envelope) = self.send_raw::<Value>(http).await?;

        if status == StatusCode::CONFLICT || envelope.is_conflict() {
            tracing::info!("Signup hit an existing account");
            return Ok(SignupOutcome::AlreadyExists);
        }

        let accepted = match envelope.success {
            Some(flag) => flag,
            None => envelope
                .message
                .as_deref()
                .is_some_and(|m| m.trim().eq_ignore_ascii_case("success")),
        };
        if status.is_success() && accepted {
            return Ok(SignupOutcome::Created {
                token: envelope.token.and_then(|t| Token::new(t)),
                message: envelope.message,
            });
        }

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message: envelope.message,
        })
    }

    /// `POST /auth/resend-verification`.
    pub async fn resend_verification(&self, email: &str) -> Result<Acknowledged, ApiError> {
        let request = self
            .request(Method::POST, "/auth/resend-verification")
            .json(&EmailBody { email });
        let envelope = self.send::<Value>(request).await?;
        Ok(Acknowledged::from_message(envelope.message))
    }

    /// `GET /auth/verify-email/{token}`: confirm the address behind a mailed link.
    pub async fn verify_email(&self, link_token: &str) -> Result<Acknowledged, ApiError> {
        let link_token = link_token.trim();
        if link_token.is_empty() || link_token.contains('/') {
            return Err(ApiError::Rejected {
                status: 400,
                message: Some("Invalid verification link".to_string()),
            });
        }
        let request = self.request(Method::GET, &format!("/auth/verify-email/{link_token}"));
        let envelope = self.send::<Value>(request).await?;
        Ok(Acknowledged::from_message(envelope.message))
    }
}
