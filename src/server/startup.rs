use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config, error::Error, model::app::AppState, service::auth::jwks::JwtVerifier,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Assemble the shared application state
pub fn build_state(config: &Config, db: DatabaseConnection) -> AppState {
    if !config.fixture_fallback {
        tracing::info!("Fixture fallback disabled, store failures will surface as errors");
    }

    AppState {
        db,
        verifier: JwtVerifier::new(&config.auth_base_url, &config.auth_audience, config.jwks_ttl),
        fixture_fallback: config.fixture_fallback,
    }
}
