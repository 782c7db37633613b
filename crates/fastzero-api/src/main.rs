//! fastzero api server.
//!
//! - Config: `FASTZERO_CONFIG` or `./fastzero.yaml`, else built-in defaults
//! - Graceful shutdown on Ctrl-C / SIGTERM (readiness flips to draining first)

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fastzero_api::{app_state::AppState, config, router};
use fastzero_core::error::{FastZeroError, Result};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(err = %e, "fastzero-api failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let explicit = std::env::var("FASTZERO_CONFIG").ok();
    let cfg = config::load(explicit.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "fastzero-api starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FastZeroError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| FastZeroError::Internal(format!("server failed: {e}")))?;

    tracing::info!("fastzero-api stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(err = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(err = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
