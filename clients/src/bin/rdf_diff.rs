//! `rdf-diff` — Prints the statements that changed between two RDF graphs.
//!
//! **Usage:**
//! ```
//! rdf-diff [-v...] <OLD> <NEW>
//! ```
//!
//! Writes one markdown section per changed subject to stdout. Prints nothing
//! when both graphs hold the same statements. Exits non-zero if either file
//! cannot be read or parsed. Logs go to stderr; set `RUST_LOG` or pass `-v`
//! to see them.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Diff two RDF graph snapshots.
#[derive(Parser)]
#[command(
    name = "rdf-diff",
    about = "Show added and deleted RDF statements between two graph files"
)]
struct Args {
    /// Old graph (RDF/XML; `.ttl` and `.nt` are read as Turtle and N-Triples).
    old: PathBuf,

    /// New graph.
    new: PathBuf,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Builds the stderr log filter. `RUST_LOG` wins when set; otherwise the
/// level comes from the `-v` count.
fn log_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn setup_logging(verbosity: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut stdout = std::io::stdout().lock();
    rdf_diff::run(&args.old, &args.new, &mut stdout).await?;
    Ok(())
}
