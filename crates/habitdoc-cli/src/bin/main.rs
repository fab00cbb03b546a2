//! habitdoc CLI binary entry point
//!
//! Sets up logging on stderr and calls the library's `run_cli()`.

use habitdoc_cli::run_cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_cli() {
        eprintln!("❌ Error: {err:?}");
        std::process::exit(1);
    }
}
