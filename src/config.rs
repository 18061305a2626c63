use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Nombre de la función global (window.<fn>) que hace el sign-in
    pub identity_provider_fn: String,
    pub mount_element_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            identity_provider_fn: "signInWithGoogle".to_string(),
            mount_element_id: "app".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("RENDALVOUS_ENVIRONMENT"),
            option_env!("RENDALVOUS_ENABLE_LOGGING"),
            option_env!("RENDALVOUS_LOG_LEVEL"),
            option_env!("RENDALVOUS_IDENTITY_PROVIDER_FN"),
            option_env!("RENDALVOUS_MOUNT_ELEMENT_ID"),
        )
    }

    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        identity_provider_fn: Option<&str>,
        mount_element_id: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            identity_provider_fn: identity_provider_fn
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.identity_provider_fn),
            mount_element_id: mount_element_id
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.mount_element_id),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm_logger (valores desconocidos => Info)
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
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
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.environment, "development");
        assert_eq!(config.identity_provider_fn, "signInWithGoogle");
    }

    #[test]
    fn parses_overrides() {
        let config = AppConfig::from_values(
            Some("production"),
            Some("false"),
            Some("WARN"),
            Some("signInWithGithub"),
            Some("root"),
        );
        assert_eq!(config.environment, "production");
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.identity_provider_fn, "signInWithGithub");
        assert_eq!(config.mount_element_id, "root");
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = AppConfig::from_values(None, Some("yes"), Some("loud"), Some(""), Some(""));
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.identity_provider_fn, "signInWithGoogle");
        assert_eq!(config.mount_element_id, "app");
    }
}
