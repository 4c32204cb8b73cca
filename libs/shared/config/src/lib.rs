use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub advisor_service_url: String,
    pub advisor_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            advisor_service_url: env::var("ADVISOR_SERVICE_URL")
                .unwrap_or_else(|_| {
                    warn!("ADVISOR_SERVICE_URL not set, using empty value");
                    String::new()
                }),
            advisor_api_key: env::var("ADVISOR_API_KEY")
                .unwrap_or_else(|_| String::new()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.advisor_service_url.is_empty()
    }
}
