use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use shared_config::AppConfig;

/// HTTP gateway to the external advisor service. The matching and
/// ranking logic lives entirely on the other side of this client.
pub struct AdvisorClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AdvisorClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.advisor_service_url.clone(),
            api_key: config.advisor_api_key.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if !self.api_key.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&self.api_key) {
                headers.insert("x-api-key", value);
            }
        }

        headers
    }

    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.get_headers())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Advisor service error ({}): {}", status, error_text);

            return Err(anyhow!(
                "Advisor service error ({}): {}",
                status,
                error_text
            ));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}
