use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::constants::DEFAULT_PRODUCTS_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub products_api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            products_api_url: DEFAULT_PRODUCTS_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            products_api_url: option_env!("PRODUCTS_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.products_api_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm_logger (Info si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_fake_store() {
        let config = AppConfig::default();
        assert_eq!(config.products_api_url, "https://fakestoreapi.com");
        assert!(!config.is_production());
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn invalid_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "verbose".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
