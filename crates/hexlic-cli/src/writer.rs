//! # Writer
//!
//! Persists encoded license text to a destination path. Overwrites any
//! existing file. No locking and no atomic rename: concurrent runs against
//! the same path resolve as last writer wins.

use std::path::Path;

/// Write `encoded` to `destination`.
///
/// Returns `true` on success. On failure, prints the destination and, on
/// the next line, the underlying error to stderr and returns `false`; the
/// error is never propagated.
pub fn persist(encoded: &str, destination: &Path) -> bool {
    match std::fs::write(destination, encoded.as_bytes()) {
        Ok(()) => {
            tracing::info!(
                destination = %destination.display(),
                bytes = encoded.len(),
                "license file written"
            );
            true
        }
        Err(e) => {
            tracing::debug!(destination = %destination.display(), kind = ?e.kind(), "write failed");
            eprintln!("Failed to open file :( -> {}\n{e}", destination.display());
            false
        }
    }
}
