/* src/server/core/rust/src/errors.rs */

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the i18n core.
/// Resolvers never produce these; only option loading and store dispatch do.
#[derive(Debug, Error)]
pub enum I18nError {
  #[error("invalid i18n options: {0}")]
  Config(String),

  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {}: {message}", .path.display())]
  Parse { path: PathBuf, message: String },

  #[error("dispatch '{action}' failed: {message}")]
  Dispatch { action: String, message: String },
}

impl I18nError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  pub fn dispatch(action: impl Into<String>, msg: impl Into<String>) -> Self {
    Self::Dispatch { action: action.into(), message: msg.into() }
  }

  /// Machine-readable code, mirrored in adapter error bodies.
  pub fn code(&self) -> &'static str {
    match self {
      Self::Config(_) | Self::Parse { .. } => "CONFIG_ERROR",
      Self::Io { .. } => "IO_ERROR",
      Self::Dispatch { .. } => "DISPATCH_ERROR",
    }
  }
}
