use std::time::Duration;

use sea_orm::Database;
use tracing::{info, warn};

use fuelpoint_chatlink::config::ChatlinkConfig;
use fuelpoint_chatlink::router::build_router;
use fuelpoint_chatlink::state::AppState;
use fuelpoint_chatlink::usecase::sweep::SweepExpiredUseCase;

#[tokio::main]
async fn main() {
    fuelpoint_core::tracing::init_tracing();

    let config = ChatlinkConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    // Spawn the expiry sweep. Failures are logged and retried next tick;
    // the request path never depends on it.
    let sweep_state = state.clone();
    let sweep_every = Duration::from_secs(config.sweep_interval_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_every);
        loop {
            ticker.tick().await;
            let usecase = SweepExpiredUseCase {
                codes: sweep_state.code_repo(),
            };
            match usecase.execute().await {
                Ok(0) => {}
                Ok(deleted) => info!(deleted, "swept expired verification codes"),
                Err(e) => warn!(error = %e, "verification code sweep failed"),
            }
        }
    });

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.chatlink_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("chatlink service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
