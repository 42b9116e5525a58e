use anyhow::Result;
use clap::Args;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::*;

mod handlers;
mod jwt_auth;
mod route;
mod state;


use route::create_router;
use state::{AppState, Config};

#[derive(Debug, Args)]
pub struct Command {
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: SocketAddr,
}

#[tokio::main]
pub async fn execute_command(cmd: &Command) -> Result<()> {
    info!("serving");

    let env = Config::from_env()?;
    let app_state = Arc::new(AppState::new(env));
    let app = create_router(app_state);

    info!("listening on {}", cmd.listen);

    axum::Server::bind(&cmd.listen)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("ctrl-c handler: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!("terminate handler: {:?}", e);
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

    println!();

    info!("signal received, starting graceful shutdown");
}
