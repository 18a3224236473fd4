// Licensed under the Apache-2.0 license

//! File pair paths and filesystem processing.
//!
//! The driver tree layout is fixed: headers under `Core/Inc`, sources under
//! `Core/Src`, one `uart{id}` pair per instance. Files are read and written
//! whole; a destination file is created or overwritten in place.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::rules::RuleSet;

/// Header path for an instance: `<root>/Core/Inc/uart{id}.h`.
pub fn header_path(root: &Path, id: u32) -> PathBuf {
    root.join("Core").join("Inc").join(format!("uart{id}.h"))
}

/// Source path for an instance: `<root>/Core/Src/uart{id}.c`.
pub fn source_path(root: &Path, id: u32) -> PathBuf {
    root.join("Core").join("Src").join(format!("uart{id}.c"))
}

/// Generate the destination instance's header and source files from the
/// source instance's files under `root`.
///
/// The two files are processed as independent steps; a failure on either
/// propagates immediately and performs no cleanup of files already written.
pub fn generate(root: &Path, uart_src: u32, uart_dst: u32) -> Result<()> {
    let rules = RuleSet::build(uart_src, uart_dst)?;
    let pairs = [
        (header_path(root, uart_src), header_path(root, uart_dst)),
        (source_path(root, uart_src), source_path(root, uart_dst)),
    ];
    for (input, output) in &pairs {
        let text = fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let converted = rules.apply(&text);
        fs::write(output, converted)
            .with_context(|| format!("failed to write {}", output.display()))?;
        debug!("wrote {}", output.display());
    }
    Ok(())
}

/// Generate every destination in order from the one source instance.
///
/// Prints one progress line per destination. Fail-fast: the first failure
/// aborts the remaining destinations and leaves already-written files in
/// place.
pub fn generate_all(root: &Path, uart_src: u32, uart_dst: &[u32]) -> Result<()> {
    for &dst in uart_dst {
        println!("Processing {uart_src} to {dst}");
        generate(root, uart_src, dst)?;
    }
    Ok(())
}
