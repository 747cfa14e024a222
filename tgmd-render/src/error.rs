//! Error types for configuration and rendering.
use std::fmt;

/// Result type for configuration construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for a render pass.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while building a [`RenderConfig`](crate::RenderConfig).
///
/// These are fatal and always surface before any rendering happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
  #[error("Expected exactly {expected} heading wrappers, found {found}")]
  HeadingCount { expected: usize, found: usize },

  #[error("Expected at least {expected} bullet glyphs, found {found}")]
  BulletCount { expected: usize, found: usize },

  #[error(
    "Bullet glyph '{0}' is a reserved MarkdownV2 character and would be \
     emitted unescaped"
  )]
  ReservedBullet(char),
}

/// Errors that abort a render pass.
///
/// Partial output written before the error must be discarded by the caller.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  #[error("No MarkdownV2 rendering exists for '{0}' nodes")]
  UnsupportedNode(&'static str),

  #[error("Heading level {0} has no configured wrapper")]
  HeadingLevel(u8),

  #[error("Failed to write to the output buffer: {0}")]
  Write(#[from] fmt::Error),
}
