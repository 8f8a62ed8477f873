#![forbid(unsafe_code)]
//! # Text Stats CLI
//!
//! Command-line front end for the `text_stats` crate. Arguments are a flag
//! sequence interpreted left to right; run without arguments (or with
//! `--help`) to see every flag.
//!
//! ## Example
//! ```bash
//! cargo run --release -- -f notes.txt -n -dd -o report.txt
//! cargo run --release -- --input commands.txt
//! ```
//!
//! Errors go to stderr through `env_logger`; set `RUST_LOG=text_stats=debug`
//! to trace flag dispatch.

use clap::Parser;
use log::debug;
use std::io;
use text_stats::{FlagRegistry, Interpreter};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Flag sequence, e.g. `-f notes.txt -n -s`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(FlagRegistry::standard(), stdout.lock());
    // Failures were reported by the interpreter; the process still ends normally.
    if let Err(e) = interpreter.execute(cli.tokens) {
        debug!("invocation ended early: {e}");
    }
}
