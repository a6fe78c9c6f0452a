use anyhow::{Context, Result};
use berth_admission::ValidationConfig;
use berth_placement::ZoneAttributeRegistry;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub validation: ValidationConfig,
    pub zones: ZoneAttributeRegistry,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = std::env::var("BERTH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let validation = ValidationConfig::from_env();

        let zones = ZoneAttributeRegistry::from_env().context("invalid zone configuration")?;

        Ok(Self {
            log_level,
            validation,
            zones,
        })
    }
}
