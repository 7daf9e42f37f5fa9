mod classes;
mod cursor;
mod error;
mod store;
mod token_set;

pub use classes::TokenKind;
use classes::TokenKind::*;
use cursor::Cursor;
pub use cursor::{ByteView, EOF_BYTE};
pub use error::Error;
pub use store::TokenStore;
pub use text_size::{TextRange, TextSize};
pub use token_set::TokenSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
    /// 1-based line of the first byte.
    pub line: u32,
    /// 1-based byte column of the first byte.
    pub column: u32,
}

impl Token {
    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    pub fn text<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        ByteView::new(bytes).slice(self.range)
    }
}

/// Produces tokens one at a time, ending with a single `EOF` token.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    line: u32,
    column: u32,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, Error> {
        TextSize::try_from(bytes.len())
            .map_err(|source| Error::InputTooLarge { len: bytes.len(), source })?;

        Ok(Self { cursor: Cursor::new(ByteView::new(bytes)), line: 1, column: 1, finished: false })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the next token. Once the end is reached every call yields the
    /// same empty `EOF` token.
    pub fn next_token(&mut self) -> Token {
        let kind = self.token_kind();
        let range = self.cursor.range();
        self.cursor.reset_pos_within_token();

        let token = Token { kind, range, line: self.line, column: self.column };

        self.step(kind, range.len());

        if kind == EOF {
            self.finished = true;
        }

        token
    }

    fn step(&mut self, kind: TokenKind, len: TextSize) {
        if kind.is_line_break() {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(u32::from(len));
        }
    }

    fn token_kind(&mut self) -> TokenKind {
        match self.cursor.advance() {
            EOF => EOF,
            first @ (WHITESPACE | DIGITS | TEXT) => {
                self.cursor.advance_while(first);
                first
            }
            CARRIAGE_RETURN => {
                if self.cursor.eat(LINE_BREAK) {
                    LINE_BREAK
                } else {
                    CARRIAGE_RETURN
                }
            }
            FORWARD_SLASH => {
                if self.cursor.eat(FORWARD_SLASH) {
                    DOUBLE_FORWARD_SLASH
                } else {
                    FORWARD_SLASH
                }
            }
            kind => kind,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Tokenizes the whole buffer. The last token of the store is always `EOF`.
pub fn tokenize(bytes: &[u8]) -> Result<TokenStore, Error> {
    let mut tokenizer = Tokenizer::new(bytes)?;
    let mut store = TokenStore::new();

    loop {
        let token = tokenizer.next_token();
        store.push(token)?;
        if token.kind == EOF {
            return Ok(store);
        }
    }
}
