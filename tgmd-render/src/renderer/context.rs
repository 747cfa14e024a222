//! Positional context threaded through the tree walk.
//!
//! Every layout decision that depends on where a node sits (top-level lists,
//! bullet tiers, quote separators) reads from here instead of walking parent
//! links.
use crate::node::NodeKind;

/// Kind of a node's direct parent, as far as layout cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
  /// The node is the document root itself.
  Root,
  Document,
  Item,
  Other,
}

/// What follows a node among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sibling {
  /// Last child of its parent.
  None,
  /// A block that writes its own leading newline (list, quote, code block).
  OwnLine,
  /// Anything that continues wherever the output currently is.
  Flowing,
}

impl Sibling {
  #[must_use]
  pub const fn of(kind: &NodeKind<'_>) -> Self {
    match kind {
      NodeKind::List | NodeKind::BlockQuote | NodeKind::CodeBlock { .. } => {
        Self::OwnLine
      },
      _ => Self::Flowing,
    }
  }
}

/// Indentation tier of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTier {
  /// Item of a list placed directly in the document.
  Top,
  /// Item one list level below the top, or in a list whose chain of
  /// enclosing items was broken by another block.
  Nested,
  /// Item of a list nested through two or more list items in a row.
  Deep,
}

impl ListTier {
  /// Leading spaces written before the bullet.
  #[must_use]
  pub const fn indent(self) -> usize {
    match self {
      Self::Top => 2,
      Self::Nested => 4,
      Self::Deep => 6,
    }
  }

  /// Index into the configured bullet glyphs.
  #[must_use]
  pub const fn bullet_index(self) -> usize {
    match self {
      Self::Top => 0,
      Self::Nested => 1,
      Self::Deep => 2,
    }
  }
}

/// Where the node currently being visited sits in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
  pub parent:       Parent,
  pub next_sibling: Sibling,
  /// Length of the innermost run of lists nested directly in list items,
  /// counting the innermost list itself. Any other block between a list and
  /// its enclosing item restarts the run at 1.
  pub list_chain:   usize,
  /// Whether the innermost enclosing list sits directly in the document.
  pub list_at_root: bool,
  /// Whether any ancestor is a block quote.
  pub in_quote:     bool,
}

impl Context {
  /// Context of the document root.
  #[must_use]
  pub const fn root() -> Self {
    Self {
      parent:       Parent::Root,
      next_sibling: Sibling::None,
      list_chain:   0,
      list_at_root: false,
      in_quote:     false,
    }
  }

  #[must_use]
  pub const fn is_top_level(&self) -> bool {
    matches!(self.parent, Parent::Document)
  }

  /// Context for a child of the node described by `self`, whose kind is
  /// `kind`.
  #[must_use]
  pub const fn child(&self, kind: &NodeKind<'_>, next_sibling: Sibling) -> Self {
    let parent = match kind {
      NodeKind::Document => Parent::Document,
      NodeKind::Item => Parent::Item,
      _ => Parent::Other,
    };
    Self {
      parent,
      next_sibling,
      list_chain: self.list_chain,
      list_at_root: self.list_at_root,
      in_quote: self.in_quote || matches!(kind, NodeKind::BlockQuote),
    }
  }

  /// Context of a list node, before its own children are visited.
  #[must_use]
  pub const fn entering_list(&self) -> Self {
    let list_chain = if matches!(self.parent, Parent::Item) {
      self.list_chain + 1
    } else {
      1
    };
    Self {
      list_chain,
      list_at_root: self.is_top_level(),
      ..*self
    }
  }

  /// Tier of a list item visited in this context.
  #[must_use]
  pub const fn list_tier(&self) -> ListTier {
    if self.list_at_root {
      ListTier::Top
    } else if self.list_chain >= 3 {
      ListTier::Deep
    } else {
      ListTier::Nested
    }
  }
}
