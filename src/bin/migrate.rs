use gift_catalog::{
    config::AppConfig,
    db::{connect, run_migrations},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;
    let orm = connect(&config).await?;
    run_migrations(&orm).await?;
    tracing::info!("migrations applied");
    Ok(())
}
