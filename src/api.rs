//! Backend REST Client
//!
//! Thin wrappers over the `/foods` resource. Every response status is
//! classified before a body is touched, so callers only reconcile local
//! state after an explicit success.

use crate::error::{classify_status, ApiError};
use crate::models::{Food, FoodDraft, NewFood};

/// Default json-server address; override at build time with `FOODS_API_URL`.
const DEFAULT_BASE_URL: &str = "http://localhost:3333";

#[derive(Clone)]
pub struct FoodsApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for FoodsApi {
    fn default() -> Self {
        Self::new(option_env!("FOODS_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl FoodsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }

    /// GET `/foods`, the full collection.
    pub async fn list(&self) -> Result<Vec<Food>, ApiError> {
        let response = ok_or_classified(self.client.get(self.collection_url()).send().await?)?;
        Ok(response.json().await?)
    }

    /// POST `/foods`. The response carries the backend-assigned id.
    pub async fn create(&self, draft: &FoodDraft) -> Result<Food, ApiError> {
        let response = ok_or_classified(
            self.client
                .post(self.collection_url())
                .json(&NewFood::from_draft(draft))
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    /// PUT `/foods/{id}` with the full merged record; returns the updated record.
    pub async fn update(&self, food: &Food) -> Result<Food, ApiError> {
        let response = ok_or_classified(
            self.client
                .put(self.record_url(food.id))
                .json(food)
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    /// DELETE `/foods/{id}`. Succeeds only on an explicit 2xx status.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        ok_or_classified(self.client.delete(self.record_url(id)).send().await?)?;
        Ok(())
    }
}

fn ok_or_classified(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    match classify_status(response.status().as_u16()) {
        None => Ok(response),
        Some(err) => Err(err),
    }
}
