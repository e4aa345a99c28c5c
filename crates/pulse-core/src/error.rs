//! Error types for `pulse-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Unknown signal type: {0}")]
  InvalidSignalType(String),

  #[error("Invalid location format")]
  InvalidLocationFormat,

  /// The store accepted the insert but returned no confirmation row.
  #[error("Failed to create report")]
  Persistence,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
