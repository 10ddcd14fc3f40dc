// ============================================================================
// CONFIG - Compile-time application configuration
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub container_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            container_id: "notes-app".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    /// (build.rs forwards `.env` entries as rustc-env).
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            container_id: option_env!("CONTAINER_ID")
                .unwrap_or("notes-app")
                .to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
