use crate::TokenKind;

/// A const-constructible bit set of [`TokenKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSet {
    bits: u32,
}

const _: () = assert!((TokenKind::TEXT as u32) < u32::BITS);

impl TokenSet {
    pub const EMPTY: Self = Self { bits: 0 };

    const fn from_kind(kind: TokenKind) -> Self {
        Self { bits: 1 << kind as u32 }
    }

    pub const fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    pub const fn new<const N: usize>(kinds: [TokenKind; N]) -> Self {
        let mut set = Self::EMPTY;

        let mut i = 0;
        while i < kinds.len() {
            set = set.union(Self::from_kind(kinds[i]));
            i += 1;
        }

        set
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.bits & Self::from_kind(kind).bits != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind::*;

    #[test]
    fn contains_only_members() {
        const SET: TokenSet = TokenSet::new([EOF, BACKSLASH, TEXT]);

        assert!(SET.contains(EOF));
        assert!(SET.contains(BACKSLASH));
        assert!(SET.contains(TEXT));
        assert!(!SET.contains(DIGITS));
        assert!(!TokenSet::EMPTY.contains(EOF));
    }

    #[test]
    fn union_merges() {
        let set = TokenSet::new([PIPE]).union(TokenSet::new([COLON]));
        assert!(set.contains(PIPE) && set.contains(COLON));
    }
}
