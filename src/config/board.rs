//! Task-tracking board configuration.

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Credentials and destination for the task-tracking service.
///
/// All three credentials default to empty so the application can start
/// unconfigured; the card service refuses to call out until they hold real
/// values (see `adapters::cards`).
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// API key for the tracking service.
    #[serde(default = "empty_secret")]
    pub api_key: SecretString,

    /// Token generated for that key.
    #[serde(default = "empty_secret")]
    pub api_token: SecretString,

    /// List that receives new cards.
    #[serde(default)]
    pub list_id: String,

    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl BoardConfig {
    /// Validate board configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_key: empty_secret(),
            api_token: empty_secret(),
            list_id: String::new(),
            base_url: default_base_url(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_base_url() -> String {
    "https://api.trello.com/1".to_string()
}
