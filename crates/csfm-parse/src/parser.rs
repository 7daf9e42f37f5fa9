use csfm_tokenizer::{Token, TokenKind, TokenStore};
use drop_bomb::DropBomb;
use text_size::{TextRange, TextSize};

use crate::Error;
use crate::arena::Arena;
use crate::tree::{Document, Node, NodeId, NodeKind};

pub(crate) struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    eof: Token,
    nodes: Arena<Node>,
    root: NodeId,
    last_marker: NodeId,
    last_loose_text: Option<NodeId>,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(tokens: &'t TokenStore) -> Result<Self, Error> {
        let eof = end_of(tokens.as_slice());
        let mut nodes = Arena::new();
        let root = nodes
            .try_alloc(Node::new(NodeKind::Document, TextRange::up_to(eof.end()), 1, 1))
            .map_err(|source| Error::OutOfMemory { len: 0, source })?;

        Ok(Self {
            tokens: tokens.as_slice(),
            pos: 0,
            eof,
            nodes,
            root,
            last_marker: root,
            last_loose_text: None,
        })
    }

    /// The token under the cursor. Past the end of the store this is `EOF`.
    pub(crate) fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn advance(&mut self) {
        if self.at(TokenKind::EOF) {
            return;
        }
        self.pos += 1;
    }

    /// Opens a node at the current token.
    pub(crate) fn start(&self) -> OpenNode {
        OpenNode::new(self.current())
    }

    fn alloc(&mut self, node: Node) -> Result<NodeId, Error> {
        let len = self.nodes.len();
        self.nodes.try_alloc(node).map_err(|source| Error::OutOfMemory { len, source })
    }

    pub(crate) fn attach_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[parent].child.is_none());
        self.nodes[parent].child = Some(child);
    }

    pub(crate) fn push_marker(&mut self, marker: NodeId) {
        self.nodes[self.last_marker].next = Some(marker);
        self.last_marker = marker;
    }

    pub(crate) fn push_loose_text(&mut self, text: NodeId) {
        match self.last_loose_text {
            Some(last) => self.nodes[last].next = Some(text),
            None => self.nodes[self.root].child = Some(text),
        }
        self.last_loose_text = Some(text);
    }

    pub(crate) fn finish(self) -> Document {
        Document::new(self.nodes, self.root)
    }
}

/// The `EOF` token closing `tokens`, synthesized when the store lacks one.
fn end_of(tokens: &[Token]) -> Token {
    match tokens.last() {
        Some(last) if last.kind == TokenKind::EOF => *last,
        Some(last) => {
            let (line, column) = if last.kind.is_line_break() {
                (last.line + 1, 1)
            } else {
                (last.line, last.column + u32::from(last.range.len()))
            };
            Token { kind: TokenKind::EOF, range: TextRange::empty(last.end()), line, column }
        }
        None => Token {
            kind: TokenKind::EOF,
            range: TextRange::empty(TextSize::new(0)),
            line: 1,
            column: 1,
        },
    }
}

pub(crate) struct OpenNode {
    first: Token,
    bomb: DropBomb,
}

impl OpenNode {
    fn new(first: Token) -> Self {
        Self { first, bomb: DropBomb::new("OpenNode must be completed") }
    }

    /// Closes the node at the start of the current token, which is not consumed.
    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: NodeKind) -> Result<NodeId, Error> {
        self.bomb.defuse();

        let range = TextRange::new(self.first.start(), p.current().start());
        p.alloc(Node::new(kind, range, self.first.line, self.first.column))
    }
}
