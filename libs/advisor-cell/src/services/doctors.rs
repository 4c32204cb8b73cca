use anyhow::Result;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::DoctorDistance;
use crate::services::client::AdvisorClient;

pub struct DoctorAdvisor {
    client: AdvisorClient,
}

impl DoctorAdvisor {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: AdvisorClient::new(config),
        }
    }

    /// Ranked (doctor, distance) pairs for the given patient criteria,
    /// in the order the advisor service returns them.
    pub async fn find(
        &self,
        symptoms: &[String],
        age: u32,
        allergies: &[String],
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DoctorDistance>> {
        debug!(
            "Requesting doctor matches: {} symptom(s), {} allergy(ies)",
            symptoms.len(),
            allergies.len()
        );

        let mut query: Vec<(&str, String)> = Vec::new();
        query.extend(symptoms.iter().map(|s| ("symptoms", s.clone())));
        query.extend(allergies.iter().map(|a| ("allergies", a.clone())));
        query.push(("age", age.to_string()));
        query.push(("latitude", latitude.to_string()));
        query.push(("longitude", longitude.to_string()));

        self.client.get("/v1/doctors/matches", &query).await
    }
}
