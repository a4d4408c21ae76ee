//! CLI entry point for the wine dataset analysis.
//!
//! Running the binary with no arguments executes the full pipeline in the
//! current working directory and exits. The `RUST_LOG` environment variable
//! only adjusts log verbosity.

use anyhow::Result;
use std::path::Path;
use tracing::info;
use wine_eda::{dataset, pipeline};

/// Initialize the tracing subscriber for logging.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    info!("Loading the bundled Wine dataset");
    let df = dataset::load()?;
    info!("Dataset loaded successfully: {:?}", df.shape());

    let images = pipeline::run(&df, Path::new("."))?;
    info!("Analysis complete, wrote {} chart files", images.len());

    Ok(())
}
