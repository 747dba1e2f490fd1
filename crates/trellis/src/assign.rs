//! Top-down rectangle assignment.
//!
//! Converts the sizes computed by [`crate::size::SizePass`] into absolute
//! rectangles, and collects fill directives for patterned expands. Child
//! rectangles are always clipped to the parent's interior, so overflow
//! degrades to truncation rather than an error.

use geom::{Axis, Expanse, Point, Rect};

use crate::tree::{Kind, NodeId, Tree};

/// Instruction for the renderer to tile a pattern over the cells of an
/// expand that its child does not cover.
///
/// The pattern repeats left-to-right, top-to-bottom across `rect` minus
/// `content`, truncating at the right boundary. The engine itself paints
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillDirective {
    /// The expand node this directive belongs to.
    pub node: NodeId,
    /// The expand's assigned rectangle.
    pub rect: Rect,
    /// The child's assigned rectangle, if the expand has a child.
    pub content: Option<Rect>,
    /// The pattern to tile.
    pub pattern: String,
}

/// The complete output of a layout pass.
///
/// Produced atomically: a failed pass yields an error and no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    /// Computed sizes, indexed by node id.
    sizes: Vec<Expanse>,
    /// Assigned rectangles, indexed by node id.
    rects: Vec<Rect>,
    /// Fill directives for patterned expands, in document order.
    fills: Vec<FillDirective>,
}

impl LayoutResult {
    /// The assigned rectangle for a node.
    pub fn rect(&self, id: NodeId) -> Rect {
        self.rects[id.index()]
    }

    /// The computed size for a node. This can differ from the assigned
    /// rectangle's size when the rectangle was clipped to its parent, or
    /// for the root, whose box is the caller's extent.
    pub fn size(&self, id: NodeId) -> Expanse {
        self.sizes[id.index()]
    }

    /// All assigned rectangles, indexed by node id.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Fill directives for patterned expands, in document order.
    pub fn fills(&self) -> &[FillDirective] {
        &self.fills
    }
}

/// The top-down assignment pass.
pub(crate) struct AssignPass<'a> {
    /// Tree under layout.
    tree: &'a Tree,
    /// Sizes computed by the sizing pass, carried into the result.
    sizes: Vec<Expanse>,
    /// Rectangles being assigned.
    rects: Vec<Rect>,
    /// Fill directives collected along the way.
    fills: Vec<FillDirective>,
}

impl<'a> AssignPass<'a> {
    /// Assign rectangles for the whole tree. `root_rect` is the root's
    /// box as resolved by the caller.
    pub(crate) fn run(tree: &'a Tree, sizes: Vec<Expanse>, root_rect: Rect) -> LayoutResult {
        let mut pass = Self {
            tree,
            sizes,
            rects: vec![Rect::zero(); tree.len()],
            fills: Vec::new(),
        };
        pass.assign(tree.root(), root_rect);
        LayoutResult {
            rects: pass.rects,
            fills: pass.fills,
            sizes: pass.sizes,
        }
    }

    /// Record a node's rectangle and place its children inside it.
    fn assign(&mut self, id: NodeId, rect: Rect) {
        self.rects[id.index()] = rect;
        let children = self.tree[id].children().to_vec();

        match &self.tree[id].kind {
            Kind::Stack(axis) => {
                let axis = *axis;
                let mut offset = 0u32;
                for child in children {
                    let size = self.sizes[child.index()];
                    let origin = match axis {
                        Axis::Horizontal => Point::new(rect.tl.x + offset, rect.tl.y),
                        Axis::Vertical => Point::new(rect.tl.x, rect.tl.y + offset),
                    };
                    self.assign(child, Rect::at(origin, size).intersect(rect));
                    offset += size.main(axis);
                }
            }
            Kind::ZStack => {
                // All children overlay at the stack origin; document
                // order is the renderer's z-order.
                for child in children {
                    let size = self.sizes[child.index()];
                    self.assign(child, Rect::at(rect.tl, size).intersect(rect));
                }
            }
            Kind::Border => self.assign_interior(children.first(), rect.inner(1)),
            Kind::Padding(edges) => {
                let interior = rect.shrink(*edges);
                self.assign_interior(children.first(), interior);
            }
            Kind::Container { .. } | Kind::Canvas { .. } | Kind::Slot => {
                self.assign_interior(children.first(), rect);
            }
            Kind::Expand { fill, .. } => {
                let content = children.first().map(|child| {
                    let child_rect =
                        Rect::at(rect.tl, self.sizes[child.index()]).intersect(rect);
                    self.assign(*child, child_rect);
                    child_rect
                });
                if let Some(pattern) = fill
                    && !pattern.is_empty()
                {
                    self.fills.push(FillDirective {
                        node: id,
                        rect,
                        content,
                        pattern: pattern.clone(),
                    });
                }
            }
            Kind::Text(_) => {
                // Inline spans share the text's box; their flow within it
                // is the renderer's concern.
                for child in children {
                    self.assign(child, rect);
                }
            }
            Kind::Span(_) | Kind::Spacer { .. } => {}
        }
    }

    /// Place a wrapper's single child within an interior rectangle.
    fn assign_interior(&mut self, child: Option<&NodeId>, interior: Rect) {
        if let Some(child) = child {
            let child_rect =
                Rect::at(interior.tl, self.sizes[child.index()]).intersect(interior);
            self.assign(*child, child_rect);
        }
    }
}
