//! CLI entry point for the Component X summary tool.
//!
//! Reads the training CSVs of the SCANIA Component X dataset and writes a
//! compact JSON summary of repair rates, study lengths and readout coverage.

use anyhow::{Context, Result};
use clap::Parser;
use component_x_summary::DEFAULT_GROUP_FIELD;
use component_x_summary::analyzers::analyzer::build_summary;
use component_x_summary::output::write_summary;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser, Debug)]
#[command(name = "component_x_summary")]
#[command(about = "Summarise the SCANIA Component X dataset", long_about = None)]
struct Cli {
    /// Dataset directory containing the train_*.csv files
    #[arg(long, value_name = "DIR", env = "COMPONENT_X_SRC")]
    src: PathBuf,

    /// Output JSON path (overwritten)
    #[arg(long, value_name = "FILE", env = "COMPONENT_X_OUT")]
    out: PathBuf,

    /// Specification column to break the summary down by
    #[arg(
        long,
        value_name = "FIELD",
        default_value = DEFAULT_GROUP_FIELD,
        env = "COMPONENT_X_GROUP_BY"
    )]
    group_by: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/component_x_summary.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("component_x_summary.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Arguments parsed");

    let src = resolve_path(&cli.src)?;
    let out = resolve_path(&cli.out)?;

    let summary = build_summary(&src, &cli.group_by)?;
    write_summary(&out, &summary)?;

    info!(out = %out.display(), "Wrote summary");
    Ok(())
}

/// Expands a leading `~` to the user's home directory and makes the path absolute.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path, dirs::home_dir())?;

    std::path::absolute(&expanded)
        .with_context(|| format!("failed to resolve {}", expanded.display()))
}

fn expand_home(path: &Path, home: Option<PathBuf>) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = home.with_context(|| {
                format!("cannot expand {}: home directory unknown", path.display())
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
