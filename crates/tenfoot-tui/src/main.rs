//! Tenfoot TUI entry point.

use std::{fs::File, path::PathBuf, sync::Arc};

use clap::Parser;
use tenfoot_tui::Runtime;
use tracing_subscriber::EnvFilter;

/// Tenfoot navigation shell demo
#[derive(Parser, Debug)]
#[command(name = "tenfoot-tui")]
#[command(about = "Terminal demo of the tenfoot directional-navigation shell")]
#[command(version)]
struct Args {
    /// Redraw interval in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Write logs to this file
    ///
    /// The terminal runs in raw mode, so logs are only emitted when a file
    /// is given. Filter with RUST_LOG as usual.
    #[arg(long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let runtime = Runtime::new(args.tick_ms)?;
    Ok(runtime.run().await?)
}
