//! Environment-driven server configuration.

use devqna_core::config::BaasConfig;

const ENV_BIND_ADDR: &str = "DEVQNA_API_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the vote endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address.
    pub bind_addr: String,
    /// BaaS connection; must carry the server API key.
    pub baas: BaasConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, devqna_core::Error> {
        Ok(Self {
            bind_addr: std::env::var(ENV_BIND_ADDR)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            baas: BaasConfig::server_from_env()?,
        })
    }
}
