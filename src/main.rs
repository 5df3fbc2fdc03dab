use corp_tracker::server::{config::Config, scheduler::Scheduler, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = startup::build_app_state(&config).await.unwrap();

    let scheduler = Scheduler::new(state)
        .await
        .unwrap()
        .start(&config.member_tracking_cron)
        .await
        .unwrap();

    tracing::info!(
        cron = %config.member_tracking_cron,
        "Member tracking scheduler started"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    scheduler.shutdown().await.unwrap();
}
