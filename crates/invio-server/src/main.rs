mod handlers;
mod router;

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::router::{AppState, app_router};

#[derive(Parser)]
#[command(name = "invio", about = "Instrumented HTTP API server")]
struct Cli {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::from_default_env().add_directive("invio=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let addr = format!("{}:{}", cli.host, cli.port);

    let state = Arc::new(AppState::new()?);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("invio server listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
