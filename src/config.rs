use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_API_URL, DEFAULT_TOAST_LIFE_MS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub api_username: Option<String>,
    pub api_password: Option<String>,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub toast_life_ms: u32,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_username: None,
            api_password: None,
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            toast_life_ms: DEFAULT_TOAST_LIFE_MS,
            language: "ES".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.api_url),
            api_username: option_env!("API_USERNAME").map(|s| s.to_string()),
            api_password: option_env!("API_PASSWORD").map(|s| s.to_string()),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.log_level),
            toast_life_ms: option_env!("TOAST_LIFE_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.toast_life_ms),
            language: option_env!("LANGUAGE")
                .map(|s| s.to_uppercase())
                .unwrap_or(defaults.language),
        }
    }

    /// URL base del recurso, sin `/` final
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Credenciales Basic, solo si usuario y contraseña están informados
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (self.api_username.as_deref(), self.api_password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }

    /// Nivel de log efectivo; `Warn` en producción si no se configuró otro
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Info
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
