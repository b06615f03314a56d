//! Profile endpoints. These use the standard bearer header.

use reqwest::Method;

use super::Token;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserProfile;

impl ApiClient {
    /// `GET /auth/profile`: the signed-in account.
    pub async fn profile(&self, token: &Token) -> Result<UserProfile, ApiError> {
        let request = self.bearer_request(Method::GET, "/auth/profile", token);
        self.send::<UserProfile>(request)
            .await?
            .data
            .ok_or_else(|| ApiError::Decode("profile response without data".to_string()))
    }

    /// `GET /auth/users`: every account. The server only answers admins.
    pub async fn list_users(&self, token: &Token) -> Result<Vec<UserProfile>, ApiError> {
        let request = self.bearer_request(Method::GET, "/auth/users", token);
        self.send::<Vec<UserProfile>>(request)
            .await?
            .data
            .ok_or_else(|| ApiError::Decode("users response without data".to_string()))
    }
}
