//! Render configuration: heading wrappers and list bullet glyphs.
//!
//! MarkdownV2 has no heading syntax, so each heading level is rendered
//! between a configured pair of wrapper strings instead. List items use a
//! bullet glyph chosen by nesting tier.
//!
//! # Examples
//!
//! ```
//! use tgmd_render::RenderConfig;
//!
//! let config = RenderConfig::builder()
//!   .heading(1, "*", "*\n")
//!   .bullets(['-', '+', '~'])
//!   .build();
//!
//! // '-' collides with MarkdownV2 syntax and is rejected
//! assert!(config.is_err());
//! ```
use serde::{Deserialize, Serialize};

use crate::{
  error::{ConfigError, ConfigResult},
  tokens,
};

/// Number of heading levels a Markdown document can contain.
pub const HEADING_LEVELS: usize = 6;

/// Number of distinct bullet tiers: top level, first nested level, and
/// everything deeper.
pub const BULLET_TIERS: usize = 3;

/// Start and end strings written around a heading's content.
///
/// Both strings are emitted verbatim, so they must already be valid
/// MarkdownV2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingWrapper {
  pub start: String,
  pub end:   String,
}

impl HeadingWrapper {
  #[must_use]
  pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
    Self {
      start: start.into(),
      end:   end.into(),
    }
  }
}

/// Immutable, validated render configuration.
///
/// Construct it once with [`RenderConfig::new`], the builder, or serde, and
/// share it across render passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRenderConfig", into = "RawRenderConfig")]
pub struct RenderConfig {
  headings: Vec<HeadingWrapper>,
  bullets:  Vec<char>,
}

/// Unvalidated serde shape of [`RenderConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRenderConfig {
  bullets:  Vec<char>,
  headings: Vec<HeadingWrapper>,
}

impl TryFrom<RawRenderConfig> for RenderConfig {
  type Error = ConfigError;

  fn try_from(raw: RawRenderConfig) -> ConfigResult<Self> {
    Self::new(raw.headings, raw.bullets)
  }
}

impl From<RenderConfig> for RawRenderConfig {
  fn from(config: RenderConfig) -> Self {
    Self {
      bullets:  config.bullets,
      headings: config.headings,
    }
  }
}

impl RenderConfig {
  /// Validate and freeze a configuration.
  ///
  /// `headings[0]` wraps level 1 headings, `headings[5]` wraps level 6.
  /// `bullets[0]` is used at the top level, `bullets[1]` one level down and
  /// `bullets[2]` for every deeper level. Extra bullets are kept but never
  /// used.
  ///
  /// # Errors
  ///
  /// Returns an error if there is not exactly one wrapper per heading level,
  /// if fewer than [`BULLET_TIERS`] bullets are given, or if a bullet is a
  /// reserved MarkdownV2 character.
  pub fn new(
    headings: Vec<HeadingWrapper>,
    bullets: Vec<char>,
  ) -> ConfigResult<Self> {
    if headings.len() != HEADING_LEVELS {
      return Err(ConfigError::HeadingCount {
        expected: HEADING_LEVELS,
        found:    headings.len(),
      });
    }
    if bullets.len() < BULLET_TIERS {
      return Err(ConfigError::BulletCount {
        expected: BULLET_TIERS,
        found:    bullets.len(),
      });
    }
    if let Some(&reserved) = bullets.iter().find(|&&c| tokens::is_reserved(c))
    {
      return Err(ConfigError::ReservedBullet(reserved));
    }

    Ok(Self { headings, bullets })
  }

  /// Start a builder seeded with the default configuration.
  #[must_use]
  pub fn builder() -> RenderConfigBuilder {
    RenderConfigBuilder::new()
  }

  /// Wrapper for a 1-based heading level, if the level is in range.
  #[must_use]
  pub fn heading(&self, level: u8) -> Option<&HeadingWrapper> {
    usize::from(level)
      .checked_sub(1)
      .and_then(|index| self.headings.get(index))
  }

  /// Bullet glyph for a nesting tier. Tiers past the last one collapse onto
  /// the deepest glyph.
  #[must_use]
  pub fn bullet(&self, tier: usize) -> char {
    let index = tier.min(BULLET_TIERS - 1);
    // Construction guarantees at least BULLET_TIERS glyphs
    self.bullets.get(index).copied().unwrap_or('•')
  }

  #[must_use]
  pub fn headings(&self) -> &[HeadingWrapper] {
    &self.headings
  }

  #[must_use]
  pub fn bullets(&self) -> &[char] {
    &self.bullets
  }
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      headings: vec![
        HeadingWrapper::new("*", "*\n"),
        HeadingWrapper::new("*", "*\n"),
        HeadingWrapper::new("_", "_\n"),
        HeadingWrapper::new("_", "_\n"),
        HeadingWrapper::new("__", "__\n"),
        HeadingWrapper::new("__", "__\n"),
      ],
      bullets:  vec!['•', '◦', '▪'],
    }
  }
}

/// Builder for constructing a `RenderConfig` with method chaining.
///
/// Validation is deferred to [`RenderConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct RenderConfigBuilder {
  headings: Vec<HeadingWrapper>,
  bullets:  Vec<char>,
}

impl RenderConfigBuilder {
  /// Create a new builder with the default wrappers and bullets.
  #[must_use]
  pub fn new() -> Self {
    let RenderConfig { headings, bullets } = RenderConfig::default();
    Self { headings, bullets }
  }

  /// Replace the wrapper for a 1-based heading level. Out of range levels
  /// are ignored.
  #[must_use]
  pub fn heading(
    mut self,
    level: u8,
    start: impl Into<String>,
    end: impl Into<String>,
  ) -> Self {
    if let Some(slot) = usize::from(level)
      .checked_sub(1)
      .and_then(|index| self.headings.get_mut(index))
    {
      *slot = HeadingWrapper::new(start, end);
    }
    self
  }

  /// Replace the whole set of heading wrappers.
  #[must_use]
  pub fn headings<I>(mut self, headings: I) -> Self
  where
    I: IntoIterator<Item = HeadingWrapper>,
  {
    self.headings = headings.into_iter().collect();
    self
  }

  /// Replace the bullet glyphs, ordered from the top level down.
  #[must_use]
  pub fn bullets<I>(mut self, bullets: I) -> Self
  where
    I: IntoIterator<Item = char>,
  {
    self.bullets = bullets.into_iter().collect();
    self
  }

  /// Validate and build the final `RenderConfig`.
  ///
  /// # Errors
  ///
  /// See [`RenderConfig::new`].
  pub fn build(self) -> ConfigResult<RenderConfig> {
    RenderConfig::new(self.headings, self.bullets)
  }
}

impl Default for RenderConfigBuilder {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;

  #[test]
  fn default_config_is_valid() {
    let config = RenderConfig::default();
    let rebuilt =
      RenderConfig::new(config.headings().to_vec(), config.bullets().to_vec())
        .unwrap();
    assert_eq!(config, rebuilt);
  }

  #[test]
  fn rejects_missing_heading_levels() {
    let err = RenderConfig::new(vec![HeadingWrapper::new("*", "*")], vec![
      'a', 'b', 'c',
    ])
    .unwrap_err();
    assert_eq!(err, ConfigError::HeadingCount {
      expected: 6,
      found:    1,
    });
  }

  #[test]
  fn rejects_too_many_heading_levels() {
    let headings = vec![HeadingWrapper::new("", ""); 7];
    let err = RenderConfig::new(headings, vec!['a', 'b', 'c']).unwrap_err();
    assert!(matches!(err, ConfigError::HeadingCount { found: 7, .. }));
  }

  #[test]
  fn rejects_too_few_bullets() {
    let err = RenderConfig::builder().bullets(['•', '◦']).build().unwrap_err();
    assert_eq!(err, ConfigError::BulletCount {
      expected: 3,
      found:    2,
    });
  }

  #[test]
  fn rejects_reserved_bullets() {
    let err = RenderConfig::builder()
      .bullets(['•', '*', '▪'])
      .build()
      .unwrap_err();
    assert_eq!(err, ConfigError::ReservedBullet('*'));
  }

  #[test]
  fn heading_lookup_is_one_based() {
    let config = RenderConfig::builder()
      .heading(1, "<1>", "</1>")
      .heading(6, "<6>", "</6>")
      .build()
      .unwrap();
    assert_eq!(config.heading(1).unwrap().start, "<1>");
    assert_eq!(config.heading(6).unwrap().end, "</6>");
    assert!(config.heading(0).is_none());
    assert!(config.heading(7).is_none());
  }

  #[test]
  fn builder_ignores_out_of_range_levels() {
    let config = RenderConfig::builder().heading(9, "x", "y").build().unwrap();
    assert_eq!(config, RenderConfig::default());
  }

  #[test]
  fn deeper_tiers_collapse_onto_last_bullet() {
    let config = RenderConfig::builder()
      .bullets(['a', 'b', 'c', 'd'])
      .build()
      .unwrap();
    assert_eq!(config.bullet(0), 'a');
    assert_eq!(config.bullet(1), 'b');
    assert_eq!(config.bullet(2), 'c');
    assert_eq!(config.bullet(7), 'c');
  }
}
