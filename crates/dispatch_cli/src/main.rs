use std::process::exit;

use clap::Parser;
use dispatch_cli::{execute, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = execute(Cli::parse()) {
        eprintln!("error: {error}");
        exit(1);
    }
}
