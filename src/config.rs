use config::{Config as ConfigBuilder, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub stripe: StripeConfig,
    pub revenuecat: RevenueCatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueCatConfig {
    pub api_key: String,
    pub project_id: String,
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            stripe: StripeConfig {
                api_key: String::new(),
                base_url: "https://api.stripe.com".to_string(),
            },
            revenuecat: RevenueCatConfig {
                api_key: String::new(),
                project_id: String::new(),
                base_url: "https://api.revenuecat.com".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Defaults layered under the environment, e.g.
    /// `REVENUE_METER_STRIPE__API_KEY` or `REVENUE_METER_SERVER__PORT`.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(
                Environment::with_prefix("REVENUE_METER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
