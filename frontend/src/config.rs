use log::Level;
use serde::Deserialize;

use crate::error::ConfigError;

const SITE_JSON: &str = include_str!("../site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub product_name: String,
    pub company_name: String,
    pub support_email: String,
    pub copyright_year: u16,
    pub assets: Assets,
}

/// Locations handed over by the asset pipeline. Opaque to the page.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Assets {
    pub logo: String,
    pub footer_logo: String,
    pub app_icon: String,
    pub hero_video: String,
    pub hero_poster: String,
}

impl SiteConfig {
    /// Parses the config bundled into the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.product_name.trim().is_empty() {
            return Err(ConfigError::Invalid("product_name"));
        }
        if self.company_name.trim().is_empty() {
            return Err(ConfigError::Invalid("company_name"));
        }
        if !self.support_email.contains('@') {
            return Err(ConfigError::Invalid("support_email"));
        }
        Ok(())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.support_email)
    }
}
