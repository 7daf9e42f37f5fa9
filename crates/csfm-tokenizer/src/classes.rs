/// The class of a byte, and the kind of the token a run of such bytes becomes.
///
/// `DOUBLE_FORWARD_SLASH` is never produced by [`TokenKind::of`]; the tokenizer
/// merges two adjacent `FORWARD_SLASH` bytes into it. Likewise a `CARRIAGE_RETURN`
/// byte followed by a line feed becomes a single `LINE_BREAK` token.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    EOF,
    WHITESPACE,
    CARRIAGE_RETURN,
    LINE_BREAK,
    FORWARD_SLASH,
    DOUBLE_FORWARD_SLASH,
    BACKSLASH,
    PIPE,
    PERIOD,
    COLON,
    SEMICOLON,
    TILDE,
    ASTERISK,
    PLUS,
    MINUS,
    EQUAL,
    DOUBLE_QUOTE,
    DIGITS,
    TEXT,
}

use TokenKind::*;

static CLASSES: [TokenKind; 256] = {
    let mut table = [TEXT; 256];

    table[0] = EOF;
    table[b' ' as usize] = WHITESPACE;
    table[b'\t' as usize] = WHITESPACE;
    table[b'\r' as usize] = CARRIAGE_RETURN;
    table[b'\n' as usize] = LINE_BREAK;
    table[b'/' as usize] = FORWARD_SLASH;
    table[b'\\' as usize] = BACKSLASH;
    table[b'|' as usize] = PIPE;
    table[b'.' as usize] = PERIOD;
    table[b':' as usize] = COLON;
    table[b';' as usize] = SEMICOLON;
    table[b'~' as usize] = TILDE;
    table[b'*' as usize] = ASTERISK;
    table[b'+' as usize] = PLUS;
    table[b'-' as usize] = MINUS;
    table[b'=' as usize] = EQUAL;
    table[b'"' as usize] = DOUBLE_QUOTE;

    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = DIGITS;
        digit += 1;
    }

    table
};

impl TokenKind {
    /// Classifies a single byte. Total over all byte values.
    #[inline]
    pub const fn of(byte: u8) -> Self {
        CLASSES[byte as usize]
    }

    /// Runs of these kinds are merged into one token.
    pub const fn is_run(self) -> bool {
        matches!(self, WHITESPACE | DIGITS | TEXT)
    }

    /// `LINE_BREAK` (LF or CR LF) and a lone `CARRIAGE_RETURN`.
    pub const fn is_line_break(self) -> bool {
        matches!(self, LINE_BREAK | CARRIAGE_RETURN)
    }

    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            FORWARD_SLASH
                | DOUBLE_FORWARD_SLASH
                | BACKSLASH
                | PIPE
                | PERIOD
                | COLON
                | SEMICOLON
                | TILDE
                | ASTERISK
                | PLUS
                | MINUS
                | EQUAL
                | DOUBLE_QUOTE
        )
    }
}
