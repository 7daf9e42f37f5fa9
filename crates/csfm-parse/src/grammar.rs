use csfm_tokenizer::TokenKind::*;
use csfm_tokenizer::{TokenKind, TokenSet};

use crate::Error;
use crate::parser::{OpenNode, Parser};
use crate::tree::{NodeId, NodeKind};

/// Non-punctuation kinds that end a marker name.
const MARKER_END: TokenSet = TokenSet::new([EOF, WHITESPACE, LINE_BREAK, CARRIAGE_RETURN, DIGITS]);

pub(crate) fn ends_marker_name(kind: TokenKind) -> bool {
    MARKER_END.contains(kind) || kind.is_punctuation()
}

pub(crate) fn document(p: &mut Parser<'_>) -> Result<(), Error> {
    while !p.at(EOF) {
        any(p)?;
    }
    Ok(())
}

/// A marker and the text following it, or text with no marker before it.
pub(crate) fn any(p: &mut Parser<'_>) -> Result<(), Error> {
    if p.at(BACKSLASH) {
        let marker = marker(p)?;
        if let Some(text) = text(p)? {
            p.attach_child(marker, text);
        }
        p.push_marker(marker);
    } else if let Some(text) = text(p)? {
        p.push_loose_text(text);
    }
    Ok(())
}

/// `\` followed by its name. Stops before the first token that cannot be part
/// of the name, leaving it for the next production.
pub(crate) fn marker(p: &mut Parser<'_>) -> Result<NodeId, Error> {
    debug_assert_eq!(p.peek_kind(), BACKSLASH);
    let m = p.start();
    p.advance();

    while !ends_marker_name(p.peek_kind()) {
        p.advance();
    }

    m.complete(p, NodeKind::Marker)
}

/// A run of content up to the end of the line, the next backslash or the end
/// of input. Leading whitespace is skipped; inner whitespace stays in the run.
/// A line break is consumed, a backslash is not.
pub(crate) fn text(p: &mut Parser<'_>) -> Result<Option<NodeId>, Error> {
    let mut open: Option<OpenNode> = None;

    loop {
        match p.peek_kind() {
            EOF | BACKSLASH => break,
            kind if kind.is_line_break() => {
                let text = open.take().map(|m| m.complete(p, NodeKind::Text)).transpose()?;
                p.advance();
                return Ok(text);
            }
            WHITESPACE => p.advance(),
            _ => {
                if open.is_none() {
                    open = Some(p.start());
                }
                p.advance();
            }
        }
    }

    open.map(|m| m.complete(p, NodeKind::Text)).transpose()
}
