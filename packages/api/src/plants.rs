//! # Plant catalog endpoints
//!
//! Every call takes the session [`Token`] and sends it in the custom `token`
//! header. Per-record calls take a [`PlantId`], so the 24-hex shape check has
//! already happened before anything goes on the wire.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list_plants`](ApiClient::list_plants) | `GET /plant` |
//! | [`get_plant`](ApiClient::get_plant) | `GET /plant/{id}` |
//! | [`add_plant`](ApiClient::add_plant) | `POST /plant/add-plant`, multipart |
//! | [`update_plant`](ApiClient::update_plant) | `PUT /plant/{id}`, JSON or multipart |
//! | [`delete_plant`](ApiClient::delete_plant) | `DELETE /plant/{id}` |

use reqwest::Method;
use serde_json::Value;

use crate::auth::{Acknowledged, Token};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ImageUpload, Plant, PlantDraft, PlantId};

impl ApiClient {
    /// The full collection. There is no paging; the server returns everything.
    pub async fn list_plants(&self, token: &Token) -> Result<Vec<Plant>, ApiError> {
        let request = self.token_request(Method::GET, "/plant", token);
        let data = self.send::<Value>(request).await?.data;

        match data {
            Some(Value::Array(items)) => {
                let total = items.len();
                // A record that fails to decode (bad `_id` included) is left out
                let plants: Vec<Plant> = items
                    .into_iter()
                    .filter_map(|item| match serde_json::from_value::<Plant>(item) {
                        Ok(plant) => Some(plant),
                        Err(e) => {
                            tracing::warn!("Skipping malformed plant record: {}", e);
                            None
                        }
                    })
                    .collect();
                tracing::debug!("Loaded {} of {} plants", plants.len(), total);
                Ok(plants)
            }
            _ => {
                tracing::warn!("Plant list response carried no array");
                Err(ApiError::Decode("Invalid data format received".to_string()))
            }
        }
    }

    pub async fn get_plant(&self, token: &Token, id: &PlantId) -> Result<Plant, ApiError> {
        let request = self.token_request(Method::GET, &plant_path(id), token);
        self.send::<Plant>(request)
            .await?
            .data
            .ok_or_else(|| ApiError::Decode("plant response without data".to_string()))
    }

    /// Create a record. The image, when given, goes in the `Image` part.
    pub async fn add_plant(
        &self,
        token: &Token,
        draft: &PlantDraft,
        image: Option<&ImageUpload>,
    ) -> Result<Acknowledged, ApiError> {
        let form = draft.to_multipart(image)?;
        let request = self
            .token_request(Method::POST, "/plant/add-plant", token)
            .multipart(form);
        let envelope = self.send::<Value>(request).await?;
        tracing::info!("Added plant {}", draft.name);
        Ok(Acknowledged::from_message(envelope.message))
    }

    /// Replace a record's fields. Without a new image this is a plain JSON
    /// body; with one it is the same multipart shape as [`add_plant`](Self::add_plant).
    pub async fn update_plant(
        &self,
        token: &Token,
        id: &PlantId,
        draft: &PlantDraft,
        image: Option<&ImageUpload>,
    ) -> Result<Acknowledged, ApiError> {
        let request = self.token_request(Method::PUT, &plant_path(id), token);
        let request = match image {
            Some(image) => request.multipart(draft.to_multipart(Some(image))?),
            None => request.json(draft),
        };
        let envelope = self.send::<Value>(request).await?;
        tracing::info!("Updated plant {}", id);
        Ok(Acknowledged::from_message(envelope.message))
    }

    pub async fn delete_plant(&self, token: &Token, id: &PlantId) -> Result<Acknowledged, ApiError> {
        let request = self.token_request(Method::DELETE, &plant_path(id), token);
        let envelope = self.send::<Value>(request).await?;
        tracing::info!("Deleted plant {}", id);
        Ok(Acknowledged::from_message(envelope.message))
    }
}

fn plant_path(id: &PlantId) -> String {
    format!("/plant/{}", id.as_str())
}
