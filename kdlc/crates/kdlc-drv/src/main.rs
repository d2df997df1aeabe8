//! kdlc CLI - parse a KDL file and print its canonical form.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse a KDL document and print its canonical form.
#[derive(Parser, Debug)]
#[command(name = "kdlc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reads a KDL file and prints its canonical form", long_about = None)]
struct Cli {
    /// Path to the KDL file to read.
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match kdlc_drv::round_trip_file(&cli.file) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
