//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub provider: ProviderSettings,
    pub routes: RouteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Connection settings for the external identity provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSettings {
    /// Session resolution mode: "token" (local verification) or "remote".
    pub mode: String,
    pub base_url: String,
    pub verify_path: String,
    pub timeout_seconds: u64,
    pub jwt_secret: String,
    pub cookie_name: String,
}

/// Redirect targets used by the gate. Paths are policy, not structure.
#[derive(Debug, Deserialize, Clone)]
pub struct RouteSettings {
    pub home: String,
    pub login: String,
    pub unauthorized: String,
    pub subscribe: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "portal-gate")?
            .set_default("provider.mode", "token")?
            .set_default("provider.base_url", "http://127.0.0.1:9000")?
            .set_default("provider.verify_path", "/v1/sessions/verify")?
            .set_default(
                "provider.timeout_seconds",
                constants::DEFAULT_PROVIDER_TIMEOUT_SECS,
            )?
            .set_default("provider.jwt_secret", "change-me")?
            .set_default("provider.cookie_name", constants::SESSION_COOKIE)?
            .set_default("routes.home", constants::HOME_PATH)?
            .set_default("routes.login", constants::LOGIN_PATH)?
            .set_default("routes.unauthorized", constants::UNAUTHORIZED_PATH)?
            .set_default("routes.subscribe", constants::SUBSCRIBE_PATH)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.provider.mode, "token");
        assert_eq!(config.provider.cookie_name, constants::SESSION_COOKIE);
    }
}
