use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use turnstile_adapters::{
    AccountServiceSettings, HashMapAccountStore, JwtTokenIssuer, PostgresAccountStore,
};
use turnstile_service::{AccountService, configure_postgresql, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AccountServiceSettings::load()?;
    let token_issuer = JwtTokenIssuer::new(settings.jwt_config());

    let account_service = match &settings.postgres {
        Some(postgres) => {
            let pg_pool = configure_postgresql(postgres).await?;
            AccountService::from_settings(
                PostgresAccountStore::new(pg_pool),
                token_issuer,
                &settings,
            )?
        }
        None => {
            tracing::warn!("no postgres configured, accounts are kept in memory");
            AccountService::from_settings(HashMapAccountStore::new(), token_issuer, &settings)?
        }
    };

    let allowed_origins = settings.auth.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting account service...");

    account_service
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}
