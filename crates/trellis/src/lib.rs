//! Trellis: a layout engine for terminal widget trees.
//!
//! Given a widget tree with resolved attributes and an outer cell budget,
//! trellis computes an absolute rectangle for every node, deterministically
//! and without side effects. The core is the factor-weighted distribution
//! of leftover stack space among expand and spacer nodes.
//!
//! Trellis owns no terminal I/O and paints no characters. Parsing,
//! bindings, themes, and rendering belong to the layers around it; they
//! hand in a resolved [`Tree`] plus a [`Measure`] collaborator and consume
//! the [`LayoutResult`].
//!
//! # Example
//!
//! ```
//! use trellis::{layout, Extent, Kind, TextMeasure, Tree};
//! use geom::Axis;
//!
//! let mut tree = Tree::new(Kind::Stack(Axis::Vertical));
//! tree.add(tree.root(), Kind::Text("Hello".into()))?;
//! let expand = tree.add(
//!     tree.root(),
//!     Kind::Expand { factor: 1, axis: None, fill: None },
//! )?;
//!
//! let result = layout(&tree, Extent::bounded(20, 10), &TextMeasure)?;
//! assert_eq!(result.rect(expand).h, 9);
//! # Ok::<(), trellis::Error>(())
//! ```

#![warn(missing_docs)]

/// Rectangle assignment pass and layout output types.
mod assign;
/// The space-distribution core.
mod distribute;
/// Error types.
pub mod error;
/// Measurement constraints and collaborators.
mod measure;
/// Size resolution pass.
mod size;
/// The widget tree model.
mod tree;

use geom::Rect;
use tracing::debug;

pub use crate::{
    assign::{FillDirective, LayoutResult},
    error::{Error, Result},
    measure::{Extent, Limit, Measure, MeasureError, TextMeasure},
    tree::{Kind, Node, NodeId, Tree},
};

/// Compute a full layout for `tree` within `extent`.
///
/// A pure, synchronous pass: sizes are resolved bottom-up (leaf content
/// via `measure`), leftover stack space is distributed to expand and
/// spacer nodes, and rectangles are assigned top-down. Identical inputs
/// always produce identical output, and a failed pass produces no partial
/// result.
///
/// The root is placed at the origin with the caller's extent as its box;
/// unbounded dimensions fall back to the root's computed size.
pub fn layout(tree: &Tree, extent: Extent, measure: &dyn Measure) -> Result<LayoutResult> {
    let sizes = size::SizePass::run(tree, measure, extent)?;

    let root_size = sizes[tree.root().index()];
    let root_rect = Rect::new(
        0,
        0,
        extent.w.cells().unwrap_or(root_size.w),
        extent.h.cells().unwrap_or(root_size.h),
    );
    debug!(nodes = tree.len(), ?root_rect, "layout pass complete");

    Ok(assign::AssignPass::run(tree, sizes, root_rect))
}
