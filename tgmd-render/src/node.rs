//! Classification of comrak nodes into the kinds MarkdownV2 can express.
use comrak::nodes::{NodeHeading, NodeValue};

use crate::error::{RenderError, RenderResult};

/// The fixed set of node kinds the renderer knows how to write.
///
/// Borrowed attributes point into the comrak node's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'n> {
  Document,
  Paragraph,
  Text(&'n str),
  SoftBreak,
  LineBreak,
  Heading { level: u8 },
  Emphasis { strength: u8 },
  Strikethrough,
  Spoiler,
  Link { destination: &'n str },
  List,
  Item,
  BlockQuote,
  CodeSpan(&'n str),
  CodeBlock {
    language: Option<&'n str>,
    body:     &'n str,
  },
}

impl<'n> NodeKind<'n> {
  /// Map a comrak value onto a supported kind.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::UnsupportedNode`] for tables, images, raw HTML
  /// and every other kind MarkdownV2 has no rendering for.
  pub fn classify(value: &'n NodeValue) -> RenderResult<Self> {
    let kind = match value {
      NodeValue::Document => Self::Document,
      NodeValue::Paragraph => Self::Paragraph,
      NodeValue::Text(text) => Self::Text(text),
      NodeValue::SoftBreak => Self::SoftBreak,
      NodeValue::LineBreak => Self::LineBreak,
      NodeValue::Heading(NodeHeading { level, .. }) => {
        Self::Heading { level: *level }
      },
      NodeValue::Emph => Self::Emphasis { strength: 1 },
      NodeValue::Strong => Self::Emphasis { strength: 2 },
      NodeValue::Strikethrough => Self::Strikethrough,
      NodeValue::SpoileredText => Self::Spoiler,
      NodeValue::Link(link) => {
        Self::Link {
          destination: &link.url,
        }
      },
      NodeValue::List(_) => Self::List,
      NodeValue::Item(_) => Self::Item,
      NodeValue::BlockQuote => Self::BlockQuote,
      NodeValue::Code(code) => Self::CodeSpan(&code.literal),
      NodeValue::CodeBlock(block) => {
        Self::CodeBlock {
          language: block.info.split_whitespace().next(),
          body:     &block.literal,
        }
      },
      other => return Err(RenderError::UnsupportedNode(unsupported_name(other))),
    };
    Ok(kind)
  }

  /// Kind name used in logs and error messages.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Document => "document",
      Self::Paragraph => "paragraph",
      Self::Text(_) => "text",
      Self::SoftBreak => "soft break",
      Self::LineBreak => "line break",
      Self::Heading { .. } => "heading",
      Self::Emphasis { .. } => "emphasis",
      Self::Strikethrough => "strikethrough",
      Self::Spoiler => "spoiler",
      Self::Link { .. } => "link",
      Self::List => "list",
      Self::Item => "list item",
      Self::BlockQuote => "block quote",
      Self::CodeSpan(_) => "code span",
      Self::CodeBlock { .. } => "code block",
    }
  }

  /// Leaf kinds are visited on entry only.
  #[must_use]
  pub const fn is_leaf(&self) -> bool {
    matches!(
      self,
      Self::Text(_) | Self::SoftBreak | Self::LineBreak | Self::CodeSpan(_)
    )
  }
}

fn unsupported_name(value: &NodeValue) -> &'static str {
  match value {
    NodeValue::FrontMatter(_) => "front matter",
    NodeValue::HtmlBlock(_) => "HTML block",
    NodeValue::HtmlInline(_) => "inline HTML",
    NodeValue::ThematicBreak => "thematic break",
    NodeValue::Table(_) => "table",
    NodeValue::TableRow(_) => "table row",
    NodeValue::TableCell => "table cell",
    NodeValue::Image(_) => "image",
    NodeValue::FootnoteDefinition(_) => "footnote definition",
    NodeValue::FootnoteReference(_) => "footnote reference",
    NodeValue::DescriptionList => "description list",
    NodeValue::Superscript => "superscript",
    NodeValue::Subscript => "subscript",
    _ => "extension",
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use comrak::nodes::{
    ListType,
    NodeCode,
    NodeCodeBlock,
    NodeLink,
    NodeList,
  };

  use super::*;

  #[test]
  fn emphasis_strength_follows_comrak_kind() {
    assert_eq!(
      NodeKind::classify(&NodeValue::Emph).unwrap(),
      NodeKind::Emphasis { strength: 1 }
    );
    assert_eq!(
      NodeKind::classify(&NodeValue::Strong).unwrap(),
      NodeKind::Emphasis { strength: 2 }
    );
  }

  #[test]
  fn ordered_and_bullet_lists_share_a_kind() {
    let bullet = NodeValue::List(NodeList {
      list_type: ListType::Bullet,
      ..NodeList::default()
    });
    let ordered = NodeValue::List(NodeList {
      list_type: ListType::Ordered,
      ..NodeList::default()
    });
    assert_eq!(NodeKind::classify(&bullet).unwrap(), NodeKind::List);
    assert_eq!(NodeKind::classify(&ordered).unwrap(), NodeKind::List);
  }

  #[test]
  fn code_block_language_is_first_info_word() {
    let value = NodeValue::CodeBlock(
      NodeCodeBlock {
        fenced: true,
        info: "rust ignore".into(),
        literal: "fn main() {}\n".into(),
        ..NodeCodeBlock::default()
      }
      .into(),
    );
    assert_eq!(NodeKind::classify(&value).unwrap(), NodeKind::CodeBlock {
      language: Some("rust"),
      body:     "fn main() {}\n",
    });
  }

  #[test]
  fn code_block_without_info_has_no_language() {
    let value = NodeValue::CodeBlock(NodeCodeBlock::default().into());
    assert!(matches!(
      NodeKind::classify(&value).unwrap(),
      NodeKind::CodeBlock { language: None, .. }
    ));
  }

  #[test]
  fn link_keeps_raw_destination() {
    let value = NodeValue::Link(
      NodeLink {
        url:   "http://example.com/a_b".into(),
        title: String::new().into(),
      }
      .into(),
    );
    assert_eq!(NodeKind::classify(&value).unwrap(), NodeKind::Link {
      destination: "http://example.com/a_b",
    });
  }

  #[test]
  fn code_span_exposes_literal() {
    let value = NodeValue::Code(NodeCode {
      num_backticks: 1,
      literal:       "x.y".into(),
    });
    assert_eq!(NodeKind::classify(&value).unwrap(), NodeKind::CodeSpan("x.y"));
  }

  #[test]
  fn unsupported_kinds_are_errors() {
    let err = NodeKind::classify(&NodeValue::ThematicBreak).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedNode("thematic break")));
    let err =
      NodeKind::classify(&NodeValue::HtmlInline("<b>".into())).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedNode("inline HTML")));
  }

  #[test]
  fn only_inline_leaves_skip_exit() {
    assert!(NodeKind::Text("x").is_leaf());
    assert!(NodeKind::CodeSpan("x").is_leaf());
    assert!(NodeKind::SoftBreak.is_leaf());
    assert!(!NodeKind::CodeBlock {
      language: None,
      body:     "",
    }
    .is_leaf());
    assert!(!NodeKind::Paragraph.is_leaf());
  }
}
