//! The MarkdownV2 tree renderer.
//!
//! The walk is depth-first. Every node is visited once on entry, before its
//! children, and once on exit, after them. Inline leaves (text, code spans,
//! breaks) are only visited on entry. Each visit writes straight into the
//! output; nothing is buffered per node.
mod context;
mod writer;

use std::fmt::Write;

use comrak::{Arena, nodes::AstNode, parse_document};
use log::{debug, trace};

pub use self::context::{Context, ListTier, Parent, Sibling};
pub use self::writer::MarkdownV2Writer;
use crate::{
  config::RenderConfig,
  error::{RenderError, RenderResult},
  node::NodeKind,
  parser_options,
  tokens,
};

/// Renders comrak trees into Telegram MarkdownV2.
///
/// Holds nothing but the immutable configuration, so one renderer can serve
/// any number of render passes, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct MarkdownV2Renderer {
  config: RenderConfig,
}

impl MarkdownV2Renderer {
  #[must_use]
  pub const fn new(config: RenderConfig) -> Self {
    Self { config }
  }

  #[must_use]
  pub const fn config(&self) -> &RenderConfig {
    &self.config
  }

  /// Parse `markdown` with [`parser_options`] and render the result.
  ///
  /// # Errors
  ///
  /// Returns an error if the document contains a node kind MarkdownV2 cannot
  /// express.
  pub fn convert(&self, markdown: &str) -> RenderResult<String> {
    let arena = Arena::new();
    let options = parser_options();
    let root = parse_document(&arena, markdown, &options);
    self.render(root)
  }

  /// Render the tree below `root` into a new string.
  ///
  /// # Errors
  ///
  /// Returns an error if the tree contains a node kind MarkdownV2 cannot
  /// express.
  pub fn render<'a>(&self, root: &'a AstNode<'a>) -> RenderResult<String> {
    let mut output = String::new();
    self.render_to(root, &mut output)?;
    Ok(output)
  }

  /// Render the tree below `root` into `out`.
  ///
  /// On error, whatever was already written to `out` is incomplete and must
  /// not be sent.
  ///
  /// # Errors
  ///
  /// Returns an error on unsupported nodes or when `out` rejects a write.
  pub fn render_to<'a, W: Write + ?Sized>(
    &self,
    root: &'a AstNode<'a>,
    out: &mut W,
  ) -> RenderResult<()> {
    let mut writer = MarkdownV2Writer::new(out);
    self.walk(root, Context::root(), &mut writer)?;
    debug!("Rendered {} bytes of MarkdownV2", writer.written());
    Ok(())
  }

  fn walk<'a, W: Write + ?Sized>(
    &self,
    node: &'a AstNode<'a>,
    ctx: Context,
    out: &mut MarkdownV2Writer<'_, W>,
  ) -> RenderResult<()> {
    let data = node.data.borrow();
    let kind = NodeKind::classify(&data.value)?;
    trace!("Visiting {} node", kind.name());

    let ctx = if matches!(kind, NodeKind::List) {
      ctx.entering_list()
    } else {
      ctx
    };

    self.visit(out, kind, &ctx, true)?;
    if kind.is_leaf() {
      return Ok(());
    }

    let mut children = node.children().peekable();
    while let Some(child) = children.next() {
      let child_ctx = ctx.child(&kind, next_sibling(children.peek().copied()));
      self.walk(child, child_ctx, out)?;
    }

    self.visit(out, kind, &ctx, false)
  }

  fn visit<W: Write + ?Sized>(
    &self,
    out: &mut MarkdownV2Writer<'_, W>,
    kind: NodeKind<'_>,
    ctx: &Context,
    entering: bool,
  ) -> RenderResult<()> {
    match kind {
      NodeKind::Document => {},

      NodeKind::Paragraph => {
        if !entering && ctx.next_sibling == Sibling::Flowing {
          line_break(out, ctx)?;
        }
      },

      NodeKind::Text(text) => out.escaped(text)?,

      NodeKind::SoftBreak | NodeKind::LineBreak => line_break(out, ctx)?,

      NodeKind::Heading { level } => {
        let wrapper = self
          .config
          .heading(level)
          .ok_or(RenderError::HeadingLevel(level))?;
        let token = if entering { &wrapper.start } else { &wrapper.end };
        quoted_verbatim(out, ctx, token)?;
      },

      NodeKind::Emphasis { .. } | NodeKind::Strikethrough | NodeKind::Spoiler => {
        // Same token on entry and exit
        if let Some(token) = symmetric_token(kind) {
          out.verbatim(token)?;
        }
      },

      NodeKind::Link { destination } => {
        if entering {
          out.verbatim(tokens::OPEN_BRACKET)?;
        } else {
          out.verbatim(tokens::CLOSE_BRACKET)?;
          out.verbatim(tokens::OPEN_PAREN)?;
          out.verbatim(destination)?;
          out.verbatim(tokens::CLOSE_PAREN)?;
        }
      },

      NodeKind::List => {
        if !entering && ctx.is_top_level() {
          out.newline()?;
        }
      },

      NodeKind::Item => {
        if entering {
          let tier = ctx.list_tier();
          line_break(out, ctx)?;
          out.spaces(tier.indent())?;
          out.glyph(self.config.bullet(tier.bullet_index()))?;
          out.glyph(tokens::SPACE)?;
        }
      },

      NodeKind::BlockQuote => {
        out.newline()?;
        if entering {
          out.verbatim(tokens::QUOTE_PREFIX)?;
        } else if ctx.is_top_level() {
          out.newline()?;
        }
      },

      NodeKind::CodeSpan(literal) => {
        out.verbatim(tokens::CODE_SPAN)?;
        out.escaped(literal)?;
        out.verbatim(tokens::CODE_SPAN)?;
      },

      NodeKind::CodeBlock { language, body } => {
        out.newline()?;
        if entering {
          out.verbatim(tokens::CODE_FENCE)?;
          if let Some(language) = language {
            out.verbatim(language)?;
          }
        } else {
          out.verbatim(&tokens::expand_tabs(body))?;
          out.verbatim(tokens::CODE_FENCE)?;
          out.newline()?;
        }
      },
    }
    Ok(())
  }
}

/// Self-closing delimiter for inline styles that open and close with the
/// same token.
#[must_use]
pub const fn symmetric_token(kind: NodeKind<'_>) -> Option<&'static str> {
  match kind {
    NodeKind::Emphasis { strength: 1 } => Some(tokens::ITALICS),
    NodeKind::Emphasis { strength: 2 } => Some(tokens::BOLD),
    NodeKind::Strikethrough => Some(tokens::STRIKETHROUGH),
    NodeKind::Spoiler => Some(tokens::SPOILER),
    _ => None,
  }
}

/// How the node following a child affects that child's trailing layout.
///
/// Kinds that fail to classify are reported when they are walked, so they
/// count as flowing content here.
fn next_sibling<'a>(node: Option<&'a AstNode<'a>>) -> Sibling {
  node.map_or(Sibling::None, |node| {
    NodeKind::classify(&node.data.borrow().value)
      .map_or(Sibling::Flowing, |kind| Sibling::of(&kind))
  })
}

/// Newline that keeps the following line inside an enclosing quote.
fn line_break<W: Write + ?Sized>(
  out: &mut MarkdownV2Writer<'_, W>,
  ctx: &Context,
) -> RenderResult<()> {
  out.newline()?;
  if ctx.in_quote {
    out.verbatim(tokens::QUOTE_PREFIX)?;
  }
  Ok(())
}

/// Verbatim write of configured text that may span lines. Inside a quote,
/// every embedded newline is continued with the quote prefix.
fn quoted_verbatim<W: Write + ?Sized>(
  out: &mut MarkdownV2Writer<'_, W>,
  ctx: &Context,
  text: &str,
) -> RenderResult<()> {
  if !ctx.in_quote {
    out.verbatim(text)?;
    return Ok(());
  }
  let mut lines = text.split(tokens::NEWLINE);
  if let Some(first) = lines.next() {
    out.verbatim(first)?;
  }
  for line in lines {
    line_break(out, ctx)?;
    out.verbatim(line)?;
  }
  Ok(())
}
