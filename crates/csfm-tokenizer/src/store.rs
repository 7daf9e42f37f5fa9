use std::fmt::Write as _;
use std::ops::Index;

use bstr::BStr;

use crate::{Error, Token};

const MIN_CAPACITY: usize = 64;

/// Append-only, insertion-ordered token storage.
///
/// Capacity doubles whenever the store is full. A failed allocation is
/// reported instead of aborting the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStore {
    tokens: Vec<Token>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        tokens
            .try_reserve_exact(capacity)
            .map_err(|source| Error::OutOfMemory { len: 0, source })?;
        Ok(Self { tokens })
    }

    pub fn push(&mut self, token: Token) -> Result<usize, Error> {
        let len = self.tokens.len();
        if len == self.tokens.capacity() {
            let additional = len.max(MIN_CAPACITY);
            self.tokens
                .try_reserve_exact(additional)
                .map_err(|source| Error::OutOfMemory { len, source })?;
        }

        self.tokens.push(token);
        Ok(len)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The source bytes of the token at `index`.
    pub fn text<'a>(&self, index: usize, bytes: &'a [u8]) -> Option<&'a [u8]> {
        self.get(index).map(|token| token.text(bytes))
    }

    /// One line per token: kind, byte range, line:column and the token text.
    pub fn debug_dump(&self, bytes: &[u8]) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            let _ = writeln!(
                out,
                "{:?} {:?} {}:{} {:?}",
                token.kind,
                token.range,
                token.line,
                token.column,
                BStr::new(token.text(bytes))
            );
        }
        out
    }
}

impl Index<usize> for TokenStore {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStore {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
