//! The widget tree model: an arena of nodes with resolved attributes.
//!
//! Trees are immutable once built. A layout pass only reads the tree and
//! writes its results into a fresh [`crate::LayoutResult`], so repeated
//! passes over the same tree cannot observe each other.

use geom::{Axis, Edges};

use crate::error::{Error, Result};

/// Identifier of a node within a [`Tree`] arena.
///
/// Ids are assigned in construction order. Since trees are built in
/// depth-first document order, structurally identical trees built the same
/// way receive identical ids, which makes node identity positional.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The arena index of this node.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The widget kind of a node, with its resolved attributes.
///
/// Attributes arrive fully evaluated from the template layer: no
/// expressions, bindings, or theme tokens remain. Each kind carries its
/// attributes as typed fields so layout never consults a dynamic bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Sequential container laying children out along one axis.
    Stack(Axis),
    /// Overlay container placing all children at the same origin. Later
    /// children render on top.
    ZStack,
    /// Fixed one-cell frame around a single child.
    Border,
    /// Fixed per-side insets around a single child.
    Padding(Edges),
    /// Sizing container: explicit dimensions override, otherwise the child
    /// size passes through.
    Container {
        /// Explicit width in cells, if any.
        width: Option<u32>,
        /// Explicit height in cells, if any.
        height: Option<u32>,
    },
    /// Drawing surface with the same sizing rules as [`Kind::Container`].
    Canvas {
        /// Explicit width in cells, if any.
        width: Option<u32>,
        /// Explicit height in cells, if any.
        height: Option<u32>,
    },
    /// Leaf text content, measured by the collaborator. May contain
    /// [`Kind::Span`] children for inline styling runs.
    Text(String),
    /// An inline styling run. Standalone spans are measured like text;
    /// spans nested under a [`Kind::Text`] are part of its content.
    Span(String),
    /// Claims a weighted share of a stack's leftover space along an axis.
    Expand {
        /// Distribution weight. Zero weighs nothing but keeps its slot.
        factor: u32,
        /// Explicit axis; defaults to the enclosing stack's axis.
        axis: Option<Axis>,
        /// Pattern tiled over cells the child does not cover.
        fill: Option<String>,
    },
    /// Like [`Kind::Expand`], but always yields priority to expand
    /// siblings for the same leftover pool. Never has children.
    Spacer {
        /// Distribution weight.
        factor: u32,
    },
    /// Placeholder for an externally managed component subtree. Sizing is
    /// a pass-through of its single child.
    Slot,
}

impl Kind {
    /// The maximum number of children this kind accepts, or `None` for
    /// unlimited.
    fn max_children(&self) -> Option<usize> {
        match self {
            Self::Stack(_) | Self::ZStack | Self::Text(_) => None,
            Self::Span(_) | Self::Spacer { .. } => Some(0),
            Self::Border
            | Self::Padding(_)
            | Self::Container { .. }
            | Self::Canvas { .. }
            | Self::Expand { .. }
            | Self::Slot => Some(1),
        }
    }

    /// A short name for diagnostics.
    fn name(&self) -> &'static str {
        match self {
            Self::Stack(_) => "stack",
            Self::ZStack => "zstack",
            Self::Border => "border",
            Self::Padding(_) => "padding",
            Self::Container { .. } => "container",
            Self::Canvas { .. } => "canvas",
            Self::Text(_) => "text",
            Self::Span(_) => "span",
            Self::Expand { .. } => "expand",
            Self::Spacer { .. } => "spacer",
            Self::Slot => "slot",
        }
    }
}

/// A single node: kind plus ordered children.
#[derive(Debug, Clone)]
pub struct Node {
    /// Widget kind and resolved attributes.
    pub kind: Kind,
    /// Ordered children. Order is semantically significant: stacking
    /// order and distribution tie-break order.
    children: Vec<NodeId>,
    /// Parent node, `None` for the root.
    parent: Option<NodeId>,
}

impl Node {
    /// The node's ordered children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node's parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An arena-backed widget tree with a single root.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Node storage; index is the node id.
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing only a root node.
    pub fn new(root: Kind) -> Self {
        Self {
            nodes: vec![Node {
                kind: root,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree contains only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The node for an id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Append a child under `parent`, validating arity and kind
    /// constraints. Returns the new node's id.
    pub fn add(&mut self, parent: NodeId, kind: Kind) -> Result<NodeId> {
        let parent_node = self
            .nodes
            .get(parent.index())
            .ok_or_else(|| Error::Invalid(format!("no such parent node: {}", parent.0)))?;

        if let Some(max) = parent_node.kind.max_children()
            && parent_node.children.len() >= max
        {
            return Err(Error::Invalid(format!(
                "{} accepts at most {} child{}",
                parent_node.kind.name(),
                max,
                if max == 1 { "" } else { "ren" },
            )));
        }
        if matches!(parent_node.kind, Kind::Text(_)) && !matches!(kind, Kind::Span(_)) {
            return Err(Error::Invalid(format!(
                "text accepts only span children, got {}",
                kind.name()
            )));
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Iterate over node ids in pre-order (parent before children).
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            for child in self.node(id).children().iter().rev() {
                stack.push(*child);
            }
            Some(id)
        })
    }

    /// Iterate over node ids in post-order (children before parent).
    pub fn postorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        fn walk(tree: &Tree, id: NodeId, out: &mut Vec<NodeId>) {
            for child in tree.node(id).children() {
                walk(tree, *child, out);
            }
            out.push(id);
        }
        let mut order = Vec::with_capacity(self.len());
        walk(self, self.root(), &mut order);
        order.into_iter()
    }
}

impl std::ops::Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[test]
    fn build_and_traverse() -> Result<()> {
        let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
        let border = tree.add(tree.root(), Kind::Border)?;
        let text = tree.add(border, Kind::Text("hi".into()))?;
        let spacer = tree.add(tree.root(), Kind::Spacer { factor: 1 })?;

        assert_eq!(tree.len(), 4);
        assert_eq!(tree[tree.root()].children(), &[border, spacer]);
        assert_eq!(tree[text].parent(), Some(border));

        let pre: Vec<NodeId> = tree.preorder().collect();
        assert_eq!(pre, vec![tree.root(), border, text, spacer]);
        let post: Vec<NodeId> = tree.postorder().collect();
        assert_eq!(post, vec![text, border, spacer, tree.root()]);
        Ok(())
    }

    #[test]
    fn single_child_arity_enforced() -> Result<()> {
        let mut tree = Tree::new(Kind::Border);
        tree.add(tree.root(), Kind::Text("a".into()))?;
        assert!(tree.add(tree.root(), Kind::Text("b".into())).is_err());
        Ok(())
    }

    #[test]
    fn spacer_is_a_leaf() {
        let mut tree = Tree::new(Kind::Spacer { factor: 1 });
        assert!(tree.add(tree.root(), Kind::Text("x".into())).is_err());
    }

    #[test]
    fn text_accepts_only_spans() -> Result<()> {
        let mut tree = Tree::new(Kind::Text("hello ".into()));
        tree.add(tree.root(), Kind::Span("world".into()))?;
        assert!(tree.add(tree.root(), Kind::Border).is_err());
        Ok(())
    }
}
