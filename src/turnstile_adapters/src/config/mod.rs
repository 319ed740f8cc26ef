pub mod constants;
pub mod settings;

pub use ::config::ConfigError;
pub use constants::*;
pub use settings::{
    AccountServiceSettings, AllowedOrigins, ApplicationSettings, AuthSettings, CookieSettings,
    JwtSettings, PostgresSettings, SameSiteSetting,
};
