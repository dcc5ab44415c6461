use dioxus_logger::tracing;
use patchkeeper::server::{
    config::Config, error::Error, model::app::AppState, router, scheduler::Scheduler, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    dioxus_logger::init(config.log_level).expect("Failed to initialize logger");

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    startup::seed_database(&db).await?;

    let mut scheduler = Scheduler::new(db.clone(), config.notifications.clone()).await?;
    scheduler.start(&config.notification_cron).await?;

    let app = router::routes().with_state(AppState::new(db, config.notifications));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
