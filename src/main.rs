mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::auth::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let storage = startup::connect_to_storage(&config).await?;
    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let state = AppState::new(
        db,
        storage,
        TokenService::new(&config.jwt_secret),
        &config.admin_password,
        config.content_staging_dir.clone(),
    );

    let app = router::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
