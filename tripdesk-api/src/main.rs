use anyhow::Context;
use tripdesk_api::{app, AppState};
use tripdesk_store::{app_config::Config, InMemoryTravelRepository, SeedData};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tripdesk_api=debug,tripdesk_store=debug,tower_http=debug,axum::rejection=trace"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let seed = SeedData::load(&config.catalog)
        .await
        .context("Failed to load catalog seed")?;
    let app_state = AppState::new(InMemoryTravelRepository::from_seed(seed));

    let app = app(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
