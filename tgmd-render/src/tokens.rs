//! MarkdownV2 escape set and wrapper tokens.
//!
//! Only literal text authored in the document goes through [`escape`]. The
//! tokens below are written verbatim by the renderer and must never be
//! escaped themselves.
use std::fmt::{self, Write};

/// Characters MarkdownV2 requires to be preceded by a backslash in plain
/// text. The backslash itself is included so literal backslashes survive.
pub const RESERVED: &[char] = &[
  '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{',
  '}', '.', '!', '\\',
];

pub const BOLD: &str = "*";
pub const ITALICS: &str = "_";
pub const STRIKETHROUGH: &str = "~";
pub const SPOILER: &str = "||";
pub const CODE_SPAN: &str = "`";
pub const CODE_FENCE: &str = "```";

pub const OPEN_BRACKET: &str = "[";
pub const CLOSE_BRACKET: &str = "]";
pub const OPEN_PAREN: &str = "(";
pub const CLOSE_PAREN: &str = ")";

/// Quote marker followed by a space.
pub const QUOTE_PREFIX: &str = "> ";

pub const SPACE: char = ' ';
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';

/// Replacement for every tab inside a code block body.
pub const TAB_EXPANSION: &str = "   ";

/// Returns `true` if `c` must be escaped in MarkdownV2 plain text.
#[must_use]
pub fn is_reserved(c: char) -> bool {
  RESERVED.contains(&c)
}

/// Escape `text` for use as MarkdownV2 literal text.
///
/// Every reserved character gains exactly one leading backslash; all other
/// characters pass through unchanged. Escaping is one-directional, so
/// escaping already-escaped text doubles the backslashes.
#[must_use]
pub fn escape(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len() + text.len() / 4);
  for c in text.chars() {
    if is_reserved(c) {
      escaped.push('\\');
    }
    escaped.push(c);
  }
  escaped
}

/// Streaming form of [`escape`], writing straight into `out`.
///
/// # Errors
///
/// Returns an error if the underlying writer rejects a write.
pub fn escape_into<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
  let mut rest = text;
  while let Some(pos) = rest.find(RESERVED) {
    let (plain, tail) = rest.split_at(pos);
    out.write_str(plain)?;
    let mut chars = tail.chars();
    if let Some(reserved) = chars.next() {
      out.write_char('\\')?;
      out.write_char(reserved)?;
    }
    rest = chars.as_str();
  }
  out.write_str(rest)
}

/// Expand every tab in a code block body to [`TAB_EXPANSION`].
#[must_use]
pub fn expand_tabs(body: &str) -> String {
  body.replace(TAB, TAB_EXPANSION)
}
