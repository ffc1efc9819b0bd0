//! aqtop - Interactive TUI dashboard for a pollution-monitoring API.
//!
//! Polls a remote HTTP API for air-quality readings, health status,
//! recommendations, spreadsheet data, and RAG query results, and renders
//! them in a five-tab terminal UI.
//!
//! Usage:
//!   aqtop                          # dashboard against http://localhost:8000
//!   aqtop --url http://host:8000   # custom API base URL
//!   aqtop --timeout 5              # shorter per-request timeout
//!   aqtop --log-file aqtop.log -v  # debug logs to a file

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use aqtop_core::api::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use aqtop_core::tui::App;

/// Interactive TUI dashboard for the pollution-monitoring API.
#[derive(Parser)]
#[command(name = "aqtop", about = "Air quality dashboard")]
struct Args {
    /// API base URL.
    #[arg(long = "url", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// UI tick interval in milliseconds (spinner animation and redraw).
    #[arg(long = "tick-ms", default_value_t = 200)]
    tick_ms: u64,

    /// Write logs to this file. Logging is disabled without it: the
    /// alternate screen owns stderr while the UI runs.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8, log_file: &Path) -> io::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("aqtop={}", level).parse().unwrap())
        .add_directive(format!("aqtop_core={}", level).parse().unwrap());

    let file = File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(args.verbose, path) {
            eprintln!("Error: cannot open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let client = ApiClient::new(&args.url, Duration::from_secs(args.timeout));
    let app = App::new(client);

    if let Err(e) = app.run(Duration::from_millis(args.tick_ms)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
