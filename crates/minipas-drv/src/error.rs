//! Error handling for the minipas driver.
//!
//! The scanner itself never fails; everything that can go wrong happens at
//! the process boundary, before or around the scan.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors the driver can surface to the user.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        /// Path the user asked to scan.
        path: PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using [`DriverError`].
pub type Result<T> = std::result::Result<T, DriverError>;
