//! CLI entry point for the dereferencer.

use tracing_subscriber::EnvFilter;
use uri_dereferencer::cli;

fn main() {
    // Quiet by default; RUST_LOG opts into fetch/retry diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
