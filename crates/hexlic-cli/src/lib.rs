//! # hexlic-cli — License File Command-Line Interface
//!
//! Provides the `hexlic` binary.
//!
//! ## Subcommands
//!
//! - `hexlic generate` — build a license and write it (default when no
//!   subcommand is given).
//! - `hexlic check <FILE>` — verify an existing file is canonical and
//!   internally consistent.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here return an exit code.
//! - Record construction and encoding are delegated to `hexlic-core`.
//! - File writes go through [`writer::persist`], which never propagates.

pub mod check;
pub mod generate;
pub mod writer;
