//! CLI entry point for daogen

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use daogen::config::defaults;

#[derive(Parser)]
#[command(name = "daogen")]
#[command(about = "Generate Rust record types, DAO stubs and usage examples from a MySQL schema")]
#[command(version)]
struct Cli {
    /// Path to the connection properties file (db.url, db.user, db.password)
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Usage errors exit like any other fatal error; --help and --version still succeed
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize logging
    // Priority: RUST_LOG env var > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let report = daogen::run_from_config_file(&cli.config, defaults::OUTPUT_DIR).await?;

    if report.is_success() {
        info!("Code generation completed successfully");
    } else {
        warn!(
            "Code generation finished with {} failed steps",
            report.failures.len()
        );
    }
    Ok(())
}
