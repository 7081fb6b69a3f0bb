//! # Generate Subcommand
//!
//! Builds a license from the built-in defaults, encodes it canonically and
//! writes it to disk (or stdout).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexlic_core::{encode, LicenseBuilder, TimeProvider, DEFAULT_OUTPUT};

use crate::writer::persist;

/// Arguments for the `hexlic generate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Output path for the license file.
    #[arg(long, short, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Print the encoded license to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUTPUT),
            stdout: false,
        }
    }
}

/// Execute the generate subcommand against `clock`.
///
/// Returns exit code: 0 on success, 1 if the file could not be written.
/// A clock failure is returned as an error; no file is produced.
pub fn run_generate(args: &GenerateArgs, clock: &dyn TimeProvider) -> Result<u8> {
    let license = LicenseBuilder::new(clock)
        .build()
        .context("failed to build license")?;
    let encoded = encode(&license).context("failed to encode license")?;

    tracing::debug!(bytes = encoded.len(), sha256 = %encoded.sha256_hex(), "encoded license");

    if args.stdout {
        println!("{encoded}");
        return Ok(0);
    }

    if persist(encoded.as_str(), &args.out) {
        println!("License file generated: {} :D", args.out.display());
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlic_core::{decode, FixedClock};

    fn clock() -> FixedClock {
        FixedClock::parse("2024-01-01 00:00:00").unwrap()
    }

    #[test]
    fn test_default_args() {
        let args = GenerateArgs::default();
        assert_eq!(args.out, PathBuf::from("idapro.hexlic"));
        assert!(!args.stdout);
    }

    #[test]
    fn test_generate_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            out: dir.path().join("idapro.hexlic"),
            stdout: false,
        };
        assert_eq!(run_generate(&args, &clock()).unwrap(), 0);

        let text = std::fs::read_to_string(&args.out).unwrap();
        assert!(!text.ends_with('\n'));
        let lic = decode(&text).unwrap();
        lic.validate().unwrap();
        assert_eq!(lic.identification().unwrap().start_date, "2024-01-01 00:00:00");
    }

    #[test]
    fn test_generate_unwritable_returns_one() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            out: dir.path().join("missing").join("idapro.hexlic"),
            stdout: false,
        };
        assert_eq!(run_generate(&args, &clock()).unwrap(), 1);
    }

    #[test]
    fn test_stdout_mode_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            out: dir.path().join("idapro.hexlic"),
            stdout: true,
        };
        assert_eq!(run_generate(&args, &clock()).unwrap(), 0);
        assert!(!args.out.exists());
    }
}
