use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::MealConfig;
use crate::error::MealError;
use crate::model::{Meal, MealApiResponse};

const RANDOM_ENDPOINT: &str = "random.php";

/// Anything that can hand the controller one meal per call.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn fetch_meal(&self) -> Result<Meal, MealError>;
}

/// Thin client for TheMealDB's random endpoint.
///
/// One attempt per call: no retry, no timeout, no caching.
pub struct MealClient {
    client: Client,
    base_url: String,
}

impl MealClient {
    pub fn new(config: &MealConfig) -> Result<Self, MealError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against a different API root, keeping the default user agent.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MealError> {
        let config = MealConfig {
            base_url: base_url.into(),
            ..MealConfig::default()
        };
        Self::new(&config)
    }

    pub fn random_url(&self) -> String {
        format!("{}/{}", self.base_url, RANDOM_ENDPOINT)
    }

    /// Fetch one random meal.
    ///
    /// # Errors
    /// - `MealError::Network` for a non-success status
    /// - `MealError::EmptyResult` when the body holds no meal
    /// - `MealError::Request` when sending or decoding fails
    pub async fn random_meal(&self) -> Result<Meal, MealError> {
        let url = self.random_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MealError::Network {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // A bare `null` body carries no meal either
        let body: Option<MealApiResponse> = response.json().await?;
        let meal = body
            .and_then(MealApiResponse::into_first)
            .ok_or(MealError::EmptyResult)?;
        debug!(
            "Fetched meal {} ({})",
            meal.id.as_deref().unwrap_or("?"),
            meal.name.as_deref().unwrap_or_default()
        );
        Ok(meal)
    }
}

#[async_trait]
impl MealSource for MealClient {
    async fn fetch_meal(&self) -> Result<Meal, MealError> {
        self.random_meal().await
    }
}
