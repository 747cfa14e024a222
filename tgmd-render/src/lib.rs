//! # tgmd-render - Markdown to Telegram MarkdownV2
//!
//! Renders a parsed Markdown tree into the MarkdownV2 dialect accepted by the
//! Telegram Bot API. Literal text is escaped, inline styles become
//! MarkdownV2 delimiters, and the constructs MarkdownV2 lacks (headings,
//! nested lists) are rendered with configurable wrappers and bullet glyphs.
//!
//! ## Quick Start
//!
//! ```rust
//! use tgmd_render::{RenderConfig, convert};
//!
//! let text = convert("# Hi\n\nSee [docs](https://example.com).", &RenderConfig::default())
//!   .unwrap();
//! assert_eq!(text, "*Hi*\nSee [docs](https://example.com)\\.");
//! ```
//!
//! ## Rendering an existing tree
//!
//! ```rust
//! use comrak::{Arena, parse_document};
//! use tgmd_render::{MarkdownV2Renderer, RenderConfig, parser_options};
//!
//! let arena = Arena::new();
//! let root = parse_document(&arena, "- one\n- two", &parser_options());
//! let renderer = MarkdownV2Renderer::new(RenderConfig::default());
//! assert_eq!(renderer.render(root).unwrap(), "\n  • one\n  • two\n");
//! ```
//!
//! Nodes MarkdownV2 has no form for (tables, images, raw HTML and the like)
//! fail the whole render with [`RenderError::UnsupportedNode`] rather than
//! being dropped silently.

pub mod config;
pub mod error;
pub mod node;
pub mod renderer;
pub mod tokens;

use comrak::Options;

pub use crate::{
  config::{HeadingWrapper, RenderConfig, RenderConfigBuilder},
  error::{ConfigError, ConfigResult, RenderError, RenderResult},
  node::NodeKind,
  renderer::MarkdownV2Renderer,
  tokens::escape,
};

/// Comrak options producing the trees this renderer understands.
///
/// Enables `~~strikethrough~~` and `||spoiler||` spans on top of CommonMark.
#[must_use]
pub fn parser_options() -> Options<'static> {
  let mut options = Options::default();
  options.extension.strikethrough = true;
  options.extension.spoiler = true;
  options
}

/// Parse `markdown` and render it as Telegram MarkdownV2.
///
/// # Errors
///
/// Returns an error if the document contains a node kind MarkdownV2 cannot
/// express.
pub fn convert(markdown: &str, config: &RenderConfig) -> RenderResult<String> {
  MarkdownV2Renderer::new(config.clone()).convert(markdown)
}
