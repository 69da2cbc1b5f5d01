use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::application::http::server::http_server::{router, state};
use crate::args::{Args, Environment, LogArgs};

mod application;
mod args;

fn init_logger(log: &LogArgs, env: Environment) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if log.json || env == Environment::Production {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log, args.env);

    let state = state(args.clone()).await?;
    let app = router(state)?;

    let addr = SocketAddr::new(args.server.host.parse()?, args.server.port);
    info!("ChefAI Companion API listening on {}", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
