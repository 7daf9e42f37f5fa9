use text_size::{TextRange, TextSize};

use crate::TokenKind;

/// The byte returned for reads at or past the end of the view.
pub const EOF_BYTE: u8 = 0;

/// A borrowed, bounds-checked window over the input bytes.
#[derive(Clone, Copy, Debug)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The byte at `offset`, or [`EOF_BYTE`] when `offset` is out of range.
    pub fn get(&self, offset: TextSize) -> u8 {
        self.bytes.get(usize::from(offset)).copied().unwrap_or(EOF_BYTE)
    }

    /// The class of the byte at `offset`.
    ///
    /// Only the end of the view is `EOF`: a NUL byte inside the view is data and
    /// classifies as `TEXT`, so every in-range byte belongs to some token.
    pub fn kind_at(&self, offset: TextSize) -> TokenKind {
        match self.bytes.get(usize::from(offset)) {
            None => TokenKind::EOF,
            Some(&EOF_BYTE) => TokenKind::TEXT,
            Some(&byte) => TokenKind::of(byte),
        }
    }

    /// The bytes covered by `range`, clamped to the view.
    pub fn slice(&self, range: TextRange) -> &'a [u8] {
        let end = usize::from(range.end()).min(self.bytes.len());
        let start = usize::from(range.start()).min(end);
        &self.bytes[start..end]
    }
}

pub(crate) struct Cursor<'a> {
    view: ByteView<'a>,
    pos: TextSize,
    token_start: TextSize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(view: ByteView<'a>) -> Self {
        Self { view, pos: TextSize::new(0), token_start: TextSize::new(0) }
    }

    pub(crate) fn range(&self) -> TextRange {
        TextRange::new(self.token_start, self.pos)
    }

    pub(crate) fn reset_pos_within_token(&mut self) {
        self.token_start = self.pos;
    }

    pub(crate) fn peek(&self) -> TokenKind {
        self.view.kind_at(self.pos)
    }

    pub(crate) fn advance(&mut self) -> TokenKind {
        let kind = self.peek();
        if kind != TokenKind::EOF {
            self.pos += TextSize::new(1);
        }
        kind
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn advance_while(&mut self, kind: TokenKind) {
        debug_assert_ne!(kind, TokenKind::EOF);
        while self.peek() == kind {
            self.advance();
        }
    }
}
