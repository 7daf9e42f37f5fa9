use std::fmt::Write as _;
use std::ops::Index;

use bstr::BStr;
use text_size::{TextRange, TextSize};

use crate::arena::{Arena, Key};

pub type NodeId = Key<Node>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// The sentinel root. Its `child` chain holds text not preceded by a
    /// marker; its `next` chain holds the markers.
    Document,
    Marker,
    Text,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub range: TextRange,
    pub line: u32,
    pub column: u32,
    pub child: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, range: TextRange, line: u32, column: u32) -> Self {
        Self { kind, range, line, column, child: None, next: None }
    }

    /// The marker name without its introducing backslash.
    pub fn name_range(&self) -> Option<TextRange> {
        match self.kind {
            NodeKind::Marker => {
                let start = (self.range.start() + TextSize::new(1)).min(self.range.end());
                Some(TextRange::new(start, self.range.end()))
            }
            _ => None,
        }
    }

    /// A marker whose name is empty, e.g. a backslash followed by a space.
    pub fn is_malformed(&self) -> bool {
        self.name_range().is_some_and(TextRange::is_empty)
    }
}

/// The node forest produced by the tree builder.
///
/// Every node lives in one arena and is released when the document is dropped;
/// all traversals borrow the document immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Arena<Node>,
    root: NodeId,
}

impl Document {
    pub(crate) fn new(nodes: Arena<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        let root = &self.nodes[self.root];
        root.child.is_none() && root.next.is_none()
    }

    pub fn child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].child
    }

    /// The marker chain hanging off the root, in source order.
    pub fn markers(&self) -> Siblings<'_> {
        self.siblings(self.nodes[self.root].next)
    }

    /// Text nodes with no marker to attach to, in source order.
    pub fn loose_text(&self) -> Siblings<'_> {
        self.siblings(self.nodes[self.root].child)
    }

    pub fn siblings(&self, first: Option<NodeId>) -> Siblings<'_> {
        Siblings { document: self, next: first }
    }

    /// Logical children: for the root, its loose text followed by its markers;
    /// for any other node, its `child` chain.
    ///
    /// The root's children are not in source order: all loose text comes
    /// before the first marker even when a loose run starts later in the input.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let node = &self.nodes[id];
        match node.kind {
            NodeKind::Document => Children { document: self, current: node.child, then: node.next },
            NodeKind::Marker | NodeKind::Text => {
                Children { document: self, current: node.child, then: None }
            }
        }
    }

    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { document: self, stack: Vec::new(), next: Some(WalkEvent::Enter(self.root)) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter_enumerated()
    }

    pub fn text<'a>(&self, id: NodeId, bytes: &'a [u8]) -> &'a [u8] {
        csfm_tokenizer::ByteView::new(bytes).slice(self.nodes[id].range)
    }

    /// Markers with an empty name, in source order.
    pub fn malformed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.markers().filter(|&id| self.nodes[id].is_malformed())
    }

    /// An indented rendering of the forest, one node per line, in the order of
    /// [`Document::children`]: loose text is printed before the markers.
    pub fn debug_tree(&self, bytes: &[u8]) -> String {
        let mut out = String::new();
        let mut depth = 0;

        for event in self.preorder() {
            match event {
                WalkEvent::Enter(id) => {
                    let node = &self.nodes[id];
                    let _ = write!(out, "{:indent$}{:?}@{:?}", "", node.kind, node.range, indent = depth * 2);
                    if node.kind != NodeKind::Document {
                        let _ = write!(
                            out,
                            " {}:{} {:?}",
                            node.line,
                            node.column,
                            BStr::new(self.text(id, bytes))
                        );
                    }
                    out.push('\n');
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }

        out
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

/// Follows `next` links.
pub struct Siblings<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Siblings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.document.nodes[id].next;
        Some(id)
    }
}

pub struct Children<'a> {
    document: &'a Document,
    current: Option<NodeId>,
    then: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = match self.current {
            Some(id) => id,
            None => self.then.take()?,
        };
        self.current = self.document.nodes[id].next;
        Some(id)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkEvent {
    Enter(NodeId),
    Leave(NodeId),
}

/// Depth-first walk over logical children, yielding enter and leave events.
pub struct Preorder<'a> {
    document: &'a Document,
    stack: Vec<(NodeId, Children<'a>)>,
    next: Option<WalkEvent>,
}

impl Preorder<'_> {
    fn step(&mut self) -> Option<WalkEvent> {
        let (parent, children) = self.stack.last_mut()?;
        let parent = *parent;

        match children.next() {
            Some(child) => Some(WalkEvent::Enter(child)),
            None => {
                self.stack.pop();
                Some(WalkEvent::Leave(parent))
            }
        }
    }
}

impl Iterator for Preorder<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        let event = self.next.take()?;

        if let WalkEvent::Enter(id) = event {
            self.stack.push((id, self.document.children(id)));
        }
        self.next = self.step();

        Some(event)
    }
}
