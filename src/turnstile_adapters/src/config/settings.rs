use axum::http::HeaderValue;
use axum_extra::extract::cookie::SameSite;
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use crate::auth::{CookieConfig, JwtConfig};

use super::constants::{
    CONFIG_DIR, DEFAULT_ENVIRONMENT, DEFAULT_JWT_ISSUER, DEFAULT_POSTGRES_MAX_CONNECTIONS,
    DEFAULT_REFRESH_THRESHOLD_IN_SECONDS, env, prod,
};

#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceSettings {
    #[serde(default)]
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    /// Without a postgres section the service keeps accounts in memory.
    #[serde(default)]
    pub postgres: Option<PostgresSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    #[serde(default)]
    pub cookie: CookieSettings,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_time_to_live")]
    pub time_to_live_in_seconds: i64,
    #[serde(default = "default_refresh_threshold")]
    pub refresh_threshold_in_seconds: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CookieSettings {
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub same_site: SameSiteSetting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSiteSetting {
    Strict,
    #[default]
    Lax,
    None,
}

impl From<SameSiteSetting> for SameSite {
    fn from(setting: SameSiteSetting) -> Self {
        match setting {
            SameSiteSetting::Strict => SameSite::Strict,
            SameSiteSetting::Lax => SameSite::Lax,
            SameSiteSetting::None => SameSite::None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}

fn default_address() -> String {
    prod::APP_ADDRESS.to_string()
}

fn default_issuer() -> String {
    DEFAULT_JWT_ISSUER.to_string()
}

fn default_time_to_live() -> i64 {
    turnstile_core::SESSION_TTL_IN_SECONDS
}

fn default_refresh_threshold() -> i64 {
    DEFAULT_REFRESH_THRESHOLD_IN_SECONDS
}

fn default_max_connections() -> u32 {
    DEFAULT_POSTGRES_MAX_CONNECTIONS
}

impl AccountServiceSettings {
    /// Loads `config/base.json`, then `config/{APP_ENVIRONMENT}.json`, then
    /// `TURNSTILE__*` variables, then `JWT_SECRET` / `DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let builder = Config::builder()
            .add_source(File::with_name(&format!("{CONFIG_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(env::CONFIG_ENV_PREFIX)
                    .separator(env::CONFIG_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option(
                "postgres.url",
                std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
            )?;

        let settings = Self::from_builder(builder)?;
        tracing::debug!(
            environment = %environment,
            address = %settings.application.address,
            postgres = settings.postgres.is_some(),
            "configuration loaded"
        );
        Ok(settings)
    }

    fn from_builder(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.refresh_threshold()?;
        Ok(settings)
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.auth.jwt.secret.clone(),
            issuer: self.auth.jwt.issuer.clone(),
            time_to_live_in_seconds: self.auth.jwt.time_to_live_in_seconds,
        }
    }

    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            secure: self.auth.cookie.secure,
            same_site: self.auth.cookie.same_site.into(),
            max_age_in_seconds: self.auth.jwt.time_to_live_in_seconds,
        }
    }

    pub fn refresh_threshold(&self) -> Result<chrono::Duration, ConfigError> {
        let seconds = self.auth.jwt.refresh_threshold_in_seconds;
        chrono::Duration::try_seconds(seconds).ok_or_else(|| {
            ConfigError::Message(format!(
                "auth.jwt.refresh_threshold_in_seconds out of range: {seconds}"
            ))
        })
    }
}
