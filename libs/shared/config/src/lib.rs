use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_anon_key: String,
    pub default_timezone: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("PLATFORM_API_URL")
                .unwrap_or_else(|_| {
                    warn!("PLATFORM_API_URL not set, using empty value");
                    String::new()
                }),
            api_anon_key: env::var("PLATFORM_API_ANON_KEY")
                .unwrap_or_else(|_| {
                    warn!("PLATFORM_API_ANON_KEY not set, using empty value");
                    String::new()
                }),
            default_timezone: env::var("VIEWER_TIMEZONE")
                .unwrap_or_else(|_| {
                    warn!("VIEWER_TIMEZONE not set, using UTC");
                    "UTC".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Scheduling engine not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
            && !self.api_anon_key.is_empty()
    }
}
