//! appicons CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! generators, and exit with status 1 when the source logo is missing.
//! For programmatic use, prefer the library API (`appicons::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
