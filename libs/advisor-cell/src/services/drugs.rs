use anyhow::Result;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::Drug;
use crate::services::client::AdvisorClient;

pub struct DrugAdvisor {
    client: AdvisorClient,
}

impl DrugAdvisor {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: AdvisorClient::new(config),
        }
    }

    /// Drugs matching the given patient criteria, in advisor order.
    pub async fn find(&self, symptoms: &[String], age: u32, allergies: &[String]) -> Result<Vec<Drug>> {
        debug!(
            "Requesting drug matches: {} symptom(s), {} allergy(ies)",
            symptoms.len(),
            allergies.len()
        );

        let mut query: Vec<(&str, String)> = Vec::new();
        query.extend(symptoms.iter().map(|s| ("symptoms", s.clone())));
        query.extend(allergies.iter().map(|a| ("allergies", a.clone())));
        query.push(("age", age.to_string()));

        self.client.get("/v1/drugs/matches", &query).await
    }
}
