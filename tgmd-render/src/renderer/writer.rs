//! Thin output helpers over any [`fmt::Write`] sink.
use std::fmt::{self, Write};

use crate::tokens;

/// Output buffer for a single render pass.
///
/// Separates the two kinds of writes the renderer makes: verbatim tokens and
/// escaped literal text.
pub struct MarkdownV2Writer<'w, W: Write + ?Sized> {
  out:     &'w mut W,
  written: usize,
}

impl<'w, W: Write + ?Sized> MarkdownV2Writer<'w, W> {
  pub const fn new(out: &'w mut W) -> Self {
    Self { out, written: 0 }
  }

  /// Write a structural token or other pre-vetted text as-is.
  pub fn verbatim(&mut self, text: &str) -> fmt::Result {
    self.written += text.len();
    self.out.write_str(text)
  }

  /// Write literal document text through the MarkdownV2 escaper.
  pub fn escaped(&mut self, text: &str) -> fmt::Result {
    let mut counter = Counting {
      inner:   &mut *self.out,
      written: 0,
    };
    let result = tokens::escape_into(&mut counter, text);
    self.written += counter.written;
    result
  }

  pub fn glyph(&mut self, c: char) -> fmt::Result {
    self.written += c.len_utf8();
    self.out.write_char(c)
  }

  pub fn newline(&mut self) -> fmt::Result {
    self.glyph(tokens::NEWLINE)
  }

  pub fn spaces(&mut self, count: usize) -> fmt::Result {
    for _ in 0..count {
      self.glyph(tokens::SPACE)?;
    }
    Ok(())
  }

  /// Bytes written so far.
  pub const fn written(&self) -> usize {
    self.written
  }
}

struct Counting<'a, W: Write + ?Sized> {
  inner:   &'a mut W,
  written: usize,
}

impl<W: Write + ?Sized> Write for Counting<'_, W> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.written += s.len();
    self.inner.write_str(s)
  }
}
