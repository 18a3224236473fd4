// Licensed under the Apache-2.0 license

//! Command-line driver for the UART instance generator.
//!
//! Rewrites the driver source/header pair for one or more UART instances
//! from a single source instance's files. The driver tree is expected next
//! to the tool binary: `<root>/Core/Inc/uart{id}.h` and
//! `<root>/Core/Src/uart{id}.c`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Parser, Debug)]
#[command(
    name = "uart-gen",
    author,
    version,
    about = "Generate UART files from a single template.",
    after_help = "To update UARTs 2, 3, 4, and 5 from 1: uart-gen 1 2 3 4 5"
)]
struct Cli {
    /// The source UART identifier.
    uart_src: u32,

    /// The destination UART identifier(s).
    #[arg(required = true)]
    uart_dst: Vec<u32>,
}

/// The UART driver tree sits in the directory containing the tool binary.
fn tool_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine the running executable path")?;
    let root = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(root.to_path_buf())
}

fn run(cli: &Cli) -> Result<()> {
    let root = tool_root()?;
    uart_generator::generate_all(&root, cli.uart_src, &cli.uart_dst)
}

fn main() {
    let cli = Cli::parse();

    let _ = SimpleLogger::new().with_level(LevelFilter::Info).env().init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
