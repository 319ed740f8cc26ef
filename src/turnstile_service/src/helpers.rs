use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use turnstile_adapters::config::PostgresSettings;

/// Connect to PostgreSQL and run all pending migrations
///
/// # Arguments
/// * `settings` - Database URL and pool size
///
/// # Returns
/// A configured PgPool ready for use
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
