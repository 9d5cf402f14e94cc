use actix_web::{web, HttpServer};
use anyhow::Context;

use bz_api::{create_app, telemetry, AppState, Collaborators};
use bz_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        "Starting Bazaar auth service"
    );
    check_secrets(&config)?;

    let infra = bz_infra::initialize(&config)
        .await
        .context("failed to initialize infrastructure")?;
    tracing::info!(pool = %infra.database.get_statistics(), "Database pool ready");

    let state = web::Data::new(AppState::new(&config, Collaborators::from(&infra)));
    let bind_address = config.server.bind_address();
    let server_config = config.server.clone();
    let environment = config.environment;

    tracing::info!(address = %bind_address, "HTTP server listening");

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), &server_config, environment)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server error")?;

    infra.database.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

/// Refuse to start in production with the built-in JWT secrets
fn check_secrets(config: &AppConfig) -> anyhow::Result<()> {
    if !config.auth.is_using_default_secrets() {
        return Ok(());
    }
    if config.environment.is_production() {
        tracing::error!("JWT secrets are not set; configure ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET");
        anyhow::bail!("refusing to start in production with default JWT secrets");
    }
    tracing::warn!("Using development JWT secrets");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_shared::config::Environment;

    #[test]
    fn test_default_secrets_rejected_in_production() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;

        let err = check_secrets(&config).unwrap_err();
        assert!(err.to_string().contains("default JWT secrets"));
    }

    #[test]
    fn test_default_secrets_allowed_outside_production() {
        let mut config = AppConfig::default();
        assert!(check_secrets(&config).is_ok());

        config.environment = Environment::Staging;
        assert!(check_secrets(&config).is_ok());
    }

    #[test]
    fn test_configured_secrets_accepted_in_production() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        config.auth.access_token_secret = "prod-access-secret".to_string();
        config.auth.refresh_token_secret = "prod-refresh-secret".to_string();
        assert!(check_secrets(&config).is_ok());

        // one default secret is still refused
        config.auth.refresh_token_secret = AppConfig::default().auth.refresh_token_secret;
        assert!(check_secrets(&config).is_err());
    }
}
