//! Tracing setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `log_level` is used, either as a bare
/// level for this crate (`debug`) or as a full filter directive
/// (`flight_planner=trace,tower_http=debug`). Without either, `verbose`
/// picks between `debug` and `warn`.
///
/// Output goes to stderr so stdout only ever carries results.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = match (verbose, log_level) {
        (_, Some(level)) => directive_for(level),
        (true, None) => "flight_planner=debug,tower_http=debug".to_string(),
        (false, None) => "flight_planner=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()?;

    Ok(())
}

fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("flight_planner={level}")
    }
}
