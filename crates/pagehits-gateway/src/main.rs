//! pagehits gateway
//!
//! - Lambda mode (AWS_LAMBDA_RUNTIME_API set): API Gateway v2 HTTP events
//! - Local mode: axum server on server.listen, `GET|POST /:page_id`

use std::process::ExitCode;

use lambda_runtime::Error;

use pagehits_gateway::obs::{self, RuntimeMode};
use pagehits_gateway::{app_state::AppState, config, router, transport};

#[tokio::main]
async fn main() -> ExitCode {
    let mode = RuntimeMode::detect();
    obs::init_tracing(mode);

    match run(mode).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "pagehits-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(mode: RuntimeMode) -> Result<(), Error> {
    let cfg = config::load_from_env()?;
    let state = AppState::from_config(cfg).await;

    match mode {
        RuntimeMode::Lambda => transport::lambda::run(state).await,
        RuntimeMode::Local => serve_local(state).await,
    }
}

async fn serve_local(state: AppState) -> Result<(), Error> {
    let listen = state.cfg().server.listen_addr()?;
    let app = router::build_router(state);

    tracing::info!(%listen, "pagehits-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler failed; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
