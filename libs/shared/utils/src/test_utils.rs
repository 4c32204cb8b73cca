use std::sync::Arc;

use shared_config::AppConfig;

pub struct TestConfig {
    pub advisor_service_url: String,
    pub advisor_api_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            advisor_service_url: "http://localhost:9400".to_string(),
            advisor_api_key: "test-api-key".to_string(),
        }
    }
}

impl TestConfig {
    /// Config pointing at a mock advisor service (usually a wiremock URI).
    pub fn for_advisor_service(url: &str) -> Self {
        Self {
            advisor_service_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            advisor_service_url: self.advisor_service_url.clone(),
            advisor_api_key: self.advisor_api_key.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}
