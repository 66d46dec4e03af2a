//! # CLI Layer
//!
//! One client of the grocery library. This is the only place that reads
//! stdin, prints, colours output or decides exit codes.
//!
//! - `setup`: argument parsing via clap
//! - `commands`: per-command handlers that call the API and print the result
//! - `print`: terminal formatting of lists, messages and share output

mod commands;
mod print;
pub mod setup;

pub use commands::run;
