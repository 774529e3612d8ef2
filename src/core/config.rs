//! Demo service configuration sourced from the process environment.

use std::env;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub app_name: String,
    pub environment: String,
    pub log_level: String,
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            environment: default_environment(),
            log_level: default_log_level(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// Default value functions (match the service's hardcoded fallbacks)
// =============================================================================

fn default_app_name() -> String {
    "devops-toolchain".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

/// Load configuration from environment variables, falling back to defaults.
///
/// No validation and no coercion: whatever string the environment holds is
/// what the config carries.
pub fn load() -> ServiceConfig {
    ServiceConfig {
        app_name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
        environment: env::var("ENVIRONMENT").unwrap_or_else(|_| default_environment()),
        log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_fallbacks() {
        let config = ServiceConfig::default();
        assert_eq!(config.app_name, "devops-toolchain");
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn load_reads_the_environment() {
        env::set_var("APP_NAME", "toolchain-under-test");
        let config = load();
        env::remove_var("APP_NAME");

        assert_eq!(config.app_name, "toolchain-under-test");
    }
}
