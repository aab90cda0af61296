//! Subcommand dispatch.

use std::net::SocketAddr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use flight_planner::graph::FlightGraph;
use flight_planner::planner::{Planner, SearchConfig, SearchError, SearchRequest};
use flight_planner::source::{LoadError, load_path};
use flight_planner::web::{AppState, create_router};

use crate::cli::{Command, SearchArgs, ServeArgs};

/// Failure of a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("cannot render results: {0}")]
    Render(#[from] serde_json::Error),

    #[error("rendered results are not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("server failed: {0}")]
    Server(#[from] std::io::Error),
}

pub fn run(command: &Command) -> Result<(), CommandError> {
    match command {
        Command::Search(args) => search(args),
        Command::Serve(args) => serve(args),
    }
}

fn search(args: &SearchArgs) -> Result<(), CommandError> {
    let config = args.planner.to_config();
    config.validate()?;

    let request = SearchRequest::from_input(
        &args.origin,
        &args.destination,
        args.bags,
        args.min_stay_days(),
    )?;

    let graph = load_path(&args.data)?;
    let result = Planner::new(&graph, &config).search(&request)?;

    println!("{}", render_json(&result.trips)?);
    Ok(())
}

/// Serialize with four-space indentation.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CommandError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(out)?)
}

fn serve(args: &ServeArgs) -> Result<(), CommandError> {
    let config = args.planner.to_config();
    config.validate()?;

    let graph = load_path(&args.data)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(listen(args.addr, graph, config))?;
    Ok(())
}

async fn listen(addr: SocketAddr, graph: FlightGraph, config: SearchConfig) -> std::io::Result<()> {
    let app = create_router(AppState::new(graph, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
