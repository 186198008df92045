use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use folio::server::{config::Config, error::Error, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_state(&config, db);

    let app = router::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(config.bind_address.as_str()).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
