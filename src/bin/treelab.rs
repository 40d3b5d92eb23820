//! # TreeLab CLI Entry Point
//!
//! Binary entry point for the TreeLab interactive shell.
//!
//! ## Usage
//!
//! ```bash
//! # Default degree-3 tree
//! treelab
//!
//! # Custom minimum degree
//! treelab --degree 2
//!
//! # Show version
//! treelab --version
//!
//! # Show help
//! treelab --help
//! ```
//!
//! Log verbosity follows the `RUST_LOG` environment variable
//! (e.g. `RUST_LOG=treelab=debug`).

use eyre::{bail, Result, WrapErr};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use treelab::cli::Repl;
use treelab::config::DEFAULT_DEGREE;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "treelab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut degree = DEFAULT_DEGREE;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("treelab {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--degree" | "-d" => {
                i += 1;
                let Some(raw) = args.get(i) else {
                    bail!("--degree requires a value");
                };
                degree = raw
                    .parse()
                    .wrap_err_with(|| format!("invalid degree: '{}'", raw))?;
            }
            arg => bail!("Unknown option: {}", arg),
        }
        i += 1;
    }

    let mut repl = Repl::new(degree)?;
    repl.run()
}

fn print_usage() {
    println!("Usage: treelab [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -d, --degree <t>   Minimum degree of the tree (default {DEFAULT_DEGREE})");
    println!("  -h, --help         Show this help");
    println!("  -v, --version      Show version");
}
