//! Frontend configuration module
//!
//! The web client is configured at compile time; there is no runtime config
//! file in the browser.

use shared::api::DEFAULT_BASE_URL;

/// Frontend configuration for the remote API
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the remote API
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FITZ_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
        if option_env!("FITZ_API_URL").is_none() {
            assert_eq!(config.api_base_url(), "/api");
        }
    }
}
