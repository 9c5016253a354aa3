//! Command Line Interface (CLI) layer for appicons.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that checks the source logo,
//! runs both platform generators, and prints progress and a summary.
//!
//! If you are embedding appicons into another application, prefer using
//! the high-level `appicons::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
