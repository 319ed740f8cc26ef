pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const CONFIG_ENV_PREFIX: &str = "TURNSTILE";
    pub const CONFIG_ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub const DEFAULT_JWT_ISSUER: &str = "turnstile";
/// Remaining lifetime below which a presented token is re-issued: one day.
pub const DEFAULT_REFRESH_THRESHOLD_IN_SECONDS: i64 = 60 * 60 * 24;
pub const DEFAULT_POSTGRES_MAX_CONNECTIONS: u32 = 5;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
