use std::net::SocketAddr;

use anyhow::Context;
use tower_http::trace::TraceLayer;

use todo_api::{
    auth::jwt::JwtKeys, config::AppConfig, db::connection, logging::init_tracing, routes::router,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging.rust_log);

    let db_cfg = cfg
        .database
        .as_ref()
        .context("APP_DATABASE__URL is required")?;
    let auth_cfg = cfg
        .auth
        .as_ref()
        .context("APP_AUTH__JWT_SECRET is required")?;

    let db = connection::connect(db_cfg).await?;
    let jwt = JwtKeys::from_secret(auth_cfg.jwt_secret.as_bytes());

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid host/port: {}", cfg.bind_addr()))?;

    let state = AppState::new(cfg, db, jwt);
    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
