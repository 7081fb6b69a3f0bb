//! # Check Subcommand
//!
//! Reads an existing license file and verifies that it is byte-for-byte
//! canonical and that its dates and owners are consistent.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexlic_core::{decode_canonical, encode};

/// Arguments for the `hexlic check` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the license file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if the file passes, 1 if it does not. An
/// unreadable file is returned as an error.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read license file: {}", args.file.display()))?;

    let license = match decode_canonical(&text) {
        Ok(license) => license,
        Err(e) => {
            println!("FAIL: {}: {e}", args.file.display());
            return Ok(1);
        }
    };

    if let Err(e) = license.validate() {
        println!("FAIL: {}: {e}", args.file.display());
        return Ok(1);
    }

    let digest = encode(&license)
        .context("failed to re-encode license")?
        .sha256_hex();
    println!("OK: {} (sha256 {digest})", args.file.display());
    Ok(0)
}
