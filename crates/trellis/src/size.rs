//! Bottom-up size resolution.
//!
//! Computes an [`Expanse`] for every node given the caller's outer budget.
//! Fixed children of a stack are measured sequentially against the running
//! remainder of the stack's main axis; expand and spacer children are
//! deferred and sized by the distributor afterwards.

use geom::{Axis, Expanse};
use tracing::trace;

use crate::{
    distribute::distribute,
    error::Result,
    measure::{Extent, Limit, Measure},
    tree::{Kind, NodeId, Tree},
};

/// Which role an expand/spacer child plays within a particular stack.
enum FillerRole {
    /// Participates in this stack's distribution.
    Expand,
    /// Participates, but only in the second (spacer) pool.
    Spacer,
    /// Declares a foreign axis: zero-sized along the stack axis.
    Mismatched,
}

/// The bottom-up sizing pass.
pub(crate) struct SizePass<'a> {
    /// Tree under layout.
    tree: &'a Tree,
    /// Leaf measurement collaborator.
    measure: &'a dyn Measure,
    /// Computed sizes, indexed by node id.
    sizes: Vec<Expanse>,
}

impl<'a> SizePass<'a> {
    /// Size the whole tree against the caller's extent, returning the
    /// per-node sizes.
    pub(crate) fn run(
        tree: &'a Tree,
        measure: &'a dyn Measure,
        extent: Extent,
    ) -> Result<Vec<Expanse>> {
        let mut pass = Self {
            tree,
            measure,
            sizes: vec![Expanse::default(); tree.len()],
        };
        pass.size_node(tree.root(), extent)?;
        Ok(pass.sizes)
    }

    /// Compute and record the size of a node within `extent`.
    fn size_node(&mut self, id: NodeId, extent: Extent) -> Result<Expanse> {
        let size = match &self.tree[id].kind {
            Kind::Text(content) => {
                // Span children are inline runs of the same text: their
                // content is appended and measured as one string, and they
                // are not sized separately.
                let mut full = content.clone();
                for child in self.tree[id].children() {
                    if let Kind::Span(span) = &self.tree[*child].kind {
                        full.push_str(span);
                    }
                }
                self.measure.measure(&full, extent.w)?
            }
            Kind::Span(content) => self.measure.measure(content, extent.w)?,
            Kind::Container { width, height } | Kind::Canvas { width, height } => {
                self.size_box(id, *width, *height, extent)?
            }
            Kind::Border => {
                let child = self.size_only_child(id, extent.shrink(2, 2))?;
                Expanse::new(child.w + 2, child.h + 2)
            }
            Kind::Padding(edges) => {
                let inner = extent.shrink(edges.horizontal(), edges.vertical());
                let child = self.size_only_child(id, inner)?;
                Expanse::new(child.w + edges.horizontal(), child.h + edges.vertical())
            }
            Kind::Stack(axis) => self.size_stack(id, *axis, extent)?,
            Kind::ZStack => self.size_zstack(id, extent)?,
            Kind::Slot => self.size_only_child(id, extent)?,
            // An expand or spacer reaching here sits outside a stack's
            // distribution (or has already been granted its share): it
            // fills its bounded box and passes the child through on
            // unbounded dimensions.
            Kind::Expand { .. } | Kind::Spacer { .. } => self.size_filler(id, extent)?,
        };
        self.sizes[id.index()] = size;
        Ok(size)
    }

    /// Size a node's single child, or zero if it has none.
    fn size_only_child(&mut self, id: NodeId, extent: Extent) -> Result<Expanse> {
        match self.tree[id].children().first() {
            Some(child) => self.size_node(*child, extent),
            None => Ok(Expanse::default()),
        }
    }

    /// Container/canvas sizing: explicit attributes override, otherwise
    /// the child size passes through.
    fn size_box(
        &mut self,
        id: NodeId,
        width: Option<u32>,
        height: Option<u32>,
        extent: Extent,
    ) -> Result<Expanse> {
        let child_extent = Extent::new(
            width.map_or(extent.w, Limit::Cells),
            height.map_or(extent.h, Limit::Cells),
        );
        let child = self.size_only_child(id, child_extent)?;
        Ok(Expanse::new(
            width.unwrap_or(child.w),
            height.unwrap_or(child.h),
        ))
    }

    /// Expand/spacer sizing against an already-fixed box: bounded
    /// dimensions are claimed in full, unbounded ones collapse to the
    /// child size.
    fn size_filler(&mut self, id: NodeId, extent: Extent) -> Result<Expanse> {
        let child = self.size_only_child(id, extent)?;
        Ok(Expanse::new(
            extent.w.cells().unwrap_or(child.w),
            extent.h.cells().unwrap_or(child.h),
        ))
    }

    /// Overlay sizing: every child is measured against the same full
    /// extent; the zstack takes the extent itself where bounded and the
    /// maximum child size elsewhere.
    fn size_zstack(&mut self, id: NodeId, extent: Extent) -> Result<Expanse> {
        let children = self.tree[id].children().to_vec();
        let mut max = Expanse::default();
        for child in children {
            let size = self.size_node(child, extent)?;
            max.w = max.w.max(size.w);
            max.h = max.h.max(size.h);
        }
        Ok(Expanse::new(
            extent.w.cells().unwrap_or(max.w),
            extent.h.cells().unwrap_or(max.h),
        ))
    }

    /// Sequential stack sizing plus leftover distribution.
    fn size_stack(&mut self, id: NodeId, axis: Axis, extent: Extent) -> Result<Expanse> {
        let children = self.tree[id].children().to_vec();
        let cross_limit = extent.cross(axis);

        let mut remaining = extent.main(axis);
        let mut consumed = 0u32;
        let mut max_cross = 0u32;
        let mut expands: Vec<NodeId> = Vec::new();
        let mut spacers: Vec<NodeId> = Vec::new();
        let mut mismatched: Vec<NodeId> = Vec::new();

        for child in &children {
            match filler_role(&self.tree[*child].kind, axis) {
                Some(FillerRole::Expand) => expands.push(*child),
                Some(FillerRole::Spacer) => spacers.push(*child),
                Some(FillerRole::Mismatched) => mismatched.push(*child),
                None => {
                    let child_extent = Extent::from_main_cross(axis, remaining, cross_limit);
                    let size = self.size_node(*child, child_extent)?;
                    consumed = consumed.saturating_add(size.main(axis));
                    remaining = remaining.saturating_sub(size.main(axis));
                    max_cross = max_cross.max(size.cross(axis));
                }
            }
        }

        // Cross extent granted to fillers: the stack's full cross budget,
        // or the widest fixed sibling when that budget is unbounded.
        let filler_cross = cross_limit.cells().unwrap_or(max_cross);

        // A foreign-axis filler is zero-sized along this stack's axis and
        // spans the full cross extent along its own.
        for child in &mismatched {
            let foreign = Extent::from_main_cross(
                axis,
                Limit::Cells(0),
                Limit::Cells(filler_cross),
            );
            let size = self.size_node(*child, foreign)?;
            max_cross = max_cross.max(size.cross(axis));
        }

        let mut distributed = 0u32;
        match remaining {
            Limit::Unbounded => {
                // No leftover pool exists: fillers pass their child size
                // through and claim nothing extra.
                for child in expands.iter().chain(&spacers) {
                    let pass_through = Extent::from_main_cross(
                        axis,
                        Limit::Unbounded,
                        Limit::Cells(filler_cross),
                    );
                    let size = self.size_node(*child, pass_through)?;
                    consumed = consumed.saturating_add(size.main(axis));
                    max_cross = max_cross.max(size.cross(axis));
                }
            }
            Limit::Cells(pool) => {
                let expand_shares = distribute(pool, &factors(self.tree, &expands));
                let leftover = pool - expand_shares.iter().sum::<u32>();
                let spacer_shares = distribute(leftover, &factors(self.tree, &spacers));
                trace!(
                    ?axis,
                    pool,
                    expands = expands.len(),
                    spacers = spacers.len(),
                    "distributing stack leftover"
                );

                for (child, share) in expands
                    .iter()
                    .zip(&expand_shares)
                    .chain(spacers.iter().zip(&spacer_shares))
                {
                    let filler_box = Extent::from_main_cross(
                        axis,
                        Limit::Cells(*share),
                        Limit::Cells(filler_cross),
                    );
                    let size = self.size_node(*child, filler_box)?;
                    distributed = distributed.saturating_add(size.main(axis));
                    max_cross = max_cross.max(size.cross(axis));
                }
            }
        }

        Ok(Expanse::from_main_cross(
            axis,
            consumed.saturating_add(distributed),
            max_cross,
        ))
    }
}

/// Classify a stack child as a distribution participant, or `None` for a
/// fixed child.
fn filler_role(kind: &Kind, stack_axis: Axis) -> Option<FillerRole> {
    match kind {
        Kind::Expand { axis, .. } => match axis {
            Some(own) if *own != stack_axis => Some(FillerRole::Mismatched),
            _ => Some(FillerRole::Expand),
        },
        Kind::Spacer { .. } => Some(FillerRole::Spacer),
        _ => None,
    }
}

/// Collect the distribution factors for a list of filler nodes.
fn factors(tree: &Tree, nodes: &[NodeId]) -> Vec<u32> {
    nodes
        .iter()
        .map(|id| match tree[*id].kind {
            Kind::Expand { factor, .. } | Kind::Spacer { factor } => factor,
            _ => 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use geom::Axis;

    use super::*;
    use crate::{
        measure::TextMeasure,
        tree::{Kind, Tree},
    };

    fn sizes(tree: &Tree, extent: Extent) -> Vec<Expanse> {
        SizePass::run(tree, &TextMeasure, extent).unwrap()
    }

    #[test]
    fn text_is_measured() {
        let tree = Tree::new(Kind::Text("Hello".into()));
        let sizes = sizes(&tree, Extent::bounded(80, 24));
        assert_eq!(sizes[0], Expanse::new(5, 1));
    }

    #[test]
    fn span_content_contributes_to_text_width() {
        let mut tree = Tree::new(Kind::Text("hello ".into()));
        tree.add(tree.root(), Kind::Span("world".into())).unwrap();
        let sizes = sizes(&tree, Extent::bounded(40, 5));
        assert_eq!(sizes[0], Expanse::new(11, 1));
    }

    #[test]
    fn border_adds_two_per_dimension() {
        let mut tree = Tree::new(Kind::Border);
        tree.add(tree.root(), Kind::Text("Hello".into())).unwrap();
        let sizes = sizes(&tree, Extent::bounded(80, 24));
        assert_eq!(sizes[0], Expanse::new(7, 3));
    }

    #[test]
    fn padding_adds_insets() {
        let mut tree = Tree::new(Kind::Padding(geom::Edges::new(1, 2, 3, 4)));
        tree.add(tree.root(), Kind::Text("Hi".into())).unwrap();
        let sizes = sizes(&tree, Extent::bounded(80, 24));
        assert_eq!(sizes[0], Expanse::new(2 + 3, 1 + 7));
    }

    #[test]
    fn container_attributes_override_child() {
        let mut tree = Tree::new(Kind::Container {
            width: Some(10),
            height: None,
        });
        tree.add(tree.root(), Kind::Text("Hello".into())).unwrap();
        let sizes = sizes(&tree, Extent::bounded(80, 24));
        assert_eq!(sizes[0], Expanse::new(10, 1));
    }

    #[test]
    fn stack_measures_sequentially_against_remainder() {
        // A vertical stack hands each fixed child the unconsumed height.
        let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
        tree.add(tree.root(), Kind::Container { width: Some(4), height: Some(10) })
            .unwrap();
        tree.add(tree.root(), Kind::Expand { factor: 1, axis: None, fill: None })
            .unwrap();
        let sizes = sizes(&tree, Extent::bounded(20, 24));
        assert_eq!(sizes[0], Expanse::new(20, 24));
        assert_eq!(sizes[2], Expanse::new(20, 14));
    }

    #[test]
    fn expand_starves_spacer() {
        let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
        tree.add(tree.root(), Kind::Text("x".into())).unwrap();
        let expand = tree
            .add(tree.root(), Kind::Expand { factor: 1, axis: None, fill: None })
            .unwrap();
        let spacer = tree.add(tree.root(), Kind::Spacer { factor: 1 }).unwrap();
        let sizes = sizes(&tree, Extent::bounded(10, 8));
        assert_eq!(sizes[expand.index()].h, 7);
        assert_eq!(sizes[spacer.index()].h, 0);
    }

    #[test]
    fn overflowing_children_clamp_remaining_to_zero() {
        let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
        tree.add(tree.root(), Kind::Container { width: Some(4), height: Some(30) })
            .unwrap();
        let expand = tree
            .add(tree.root(), Kind::Expand { factor: 3, axis: None, fill: None })
            .unwrap();
        let sizes = sizes(&tree, Extent::bounded(20, 24));
        assert_eq!(sizes[expand.index()].h, 0);
    }

    #[test]
    fn unbounded_main_axis_passes_through() {
        let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
        let expand = tree
            .add(tree.root(), Kind::Expand { factor: 1, axis: None, fill: None })
            .unwrap();
        let text = tree.add(expand, Kind::Text("Hello".into())).unwrap();
        let sizes = sizes(
            &tree,
            Extent::new(Limit::Cells(20), Limit::Unbounded),
        );
        assert_eq!(sizes[text.index()], Expanse::new(5, 1));
        // The expand claims no extra height, only its bounded width.
        assert_eq!(sizes[expand.index()], Expanse::new(20, 1));
    }

    #[test]
    fn mismatched_axis_is_zero_along_stack_axis() {
        let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
        tree.add(tree.root(), Kind::Text("abc".into())).unwrap();
        let expand = tree
            .add(
                tree.root(),
                Kind::Expand { factor: 1, axis: Some(Axis::Horizontal), fill: None },
            )
            .unwrap();
        let sizes = sizes(&tree, Extent::bounded(12, 6));
        assert_eq!(sizes[expand.index()], Expanse::new(12, 0));
    }

    #[test]
    fn zstack_takes_bounded_extent() {
        let mut tree = Tree::new(Kind::ZStack);
        tree.add(tree.root(), Kind::Text("deep".into())).unwrap();
        tree.add(tree.root(), Kind::Text("x".into())).unwrap();
        let sizes = sizes(&tree, Extent::bounded(9, 3));
        assert_eq!(sizes[0], Expanse::new(9, 3));
    }

    #[test]
    fn zstack_hugs_children_when_unbounded() {
        let mut tree = Tree::new(Kind::ZStack);
        tree.add(tree.root(), Kind::Text("deep".into())).unwrap();
        tree.add(tree.root(), Kind::Text("x".into())).unwrap();
        let sizes = sizes(
            &tree,
            Extent::new(Limit::Unbounded, Limit::Unbounded),
        );
        assert_eq!(sizes[0], Expanse::new(4, 1));
    }

    #[test]
    fn measurement_failure_aborts_the_pass() {
        struct Failing;
        impl Measure for Failing {
            fn measure(
                &self,
                _content: &str,
                _available_width: Limit,
            ) -> std::result::Result<Expanse, crate::measure::MeasureError> {
                Err(crate::measure::MeasureError::new("no font metrics"))
            }
        }
        let tree = Tree::new(Kind::Text("Hello".into()));
        assert!(SizePass::run(&tree, &Failing, Extent::bounded(10, 10)).is_err());
    }
}
