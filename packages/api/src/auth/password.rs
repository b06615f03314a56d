//! # Password recovery endpoints
//!
//! The recovery flow is three calls against the same email address:
//!
//! 1. [`forget_password`](ApiClient::forget_password) mails a six-digit code.
//! 2. [`verify_otp`](ApiClient::verify_otp) checks the code
//!    ([`send_otp`](ApiClient::send_otp) mails a fresh one).
//! 3. [`reset_password`](ApiClient::reset_password) stores the new password.
//!
//! None of them needs a session token.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::account::EmailBody;
use super::Acknowledged;
use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct OtpBody<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetBody<'a> {
    email: &'a str,
    new_password: &'a str,
    confirm_password: &'a str,
}

impl ApiClient {
    /// `POST /auth/forget-password`.
    pub async fn forget_password(&self, email: &str) -> Result<Acknowledged, ApiError> {
        self.acknowledge("/auth/forget-password", &EmailBody { email })
            .await
    }

    /// `POST /auth/send-otp`: mail a new code to `email`.
    pub async fn send_otp(&self, email: &str) -> Result<Acknowledged, ApiError> {
        self.acknowledge("/auth/send-otp", &EmailBody { email }).await
    }

    /// `POST /auth/verify-otp`.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<Acknowledged, ApiError> {
        self.acknowledge("/auth/verify-otp", &OtpBody { email, otp })
            .await
    }

    /// `POST /auth/reset-password`.
    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Acknowledged, ApiError> {
        self.acknowledge(
            "/auth/reset-password",
            &ResetBody {
                email,
                new_password,
                confirm_password,
            },
        )
        .await
    }

    async fn acknowledge<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Acknowledged, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        let envelope = self.send::<Value>(request).await?;
        Ok(Acknowledged::from_message(envelope.message))
    }
}
