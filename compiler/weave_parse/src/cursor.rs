//! Byte cursor over declaration text.
//!
//! The grammar is ASCII-only, so the cursor works on bytes. Every position it
//! stops at is either the start, the end, or directly after an ASCII byte, so
//! slicing the source at a cursor position never splits a character.

/// A position in the source text plus the end of the region being parsed.
///
/// Copying a cursor is a snapshot. Nested declarators and conversion targets
/// are parsed with a cursor whose `end` is pulled in to the delimiter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            end: source.len(),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The same region with the position moved.
    #[must_use]
    pub fn at(&self, pos: usize) -> Self {
        Cursor {
            pos: pos.min(self.end),
            ..*self
        }
    }

    /// A cursor over `start..end` of the same source.
    #[must_use]
    pub fn bounded(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.source.len());
        Cursor {
            source: self.source,
            pos: start.min(end),
            end,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        let at = self.pos + offset;
        if at < self.end {
            self.source.as_bytes().get(at).copied()
        } else {
            None
        }
    }

    #[inline]
    pub fn check(&self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    /// The unparsed remainder of the region.
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos..self.end).unwrap_or_default()
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.end);
    }

    /// Consume `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.check(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `text` if the remainder starts with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Consume `word` only if no identifier byte follows it.
    ///
    /// `is_id` decides what counts as an identifier byte, which depends on
    /// whether `%` is a wildcard.
    pub fn eat_word(&mut self, word: &str, is_id: impl Fn(u8) -> bool) -> bool {
        if !self.rest().starts_with(word) {
            return false;
        }
        match self.peek_at(word.len()) {
            Some(next) if is_id(next) => false,
            _ => {
                self.pos += word.len();
                true
            }
        }
    }

    /// Consume the longest run of bytes satisfying `pred`.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
        self.source.get(start..self.pos).unwrap_or_default()
    }

    pub fn skip_blanks(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }
}
