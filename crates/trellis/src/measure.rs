//! Measurement constraints and the leaf-content measurement collaborator.

use geom::{Axis, Expanse};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// A one-dimensional space budget.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Limit {
    /// A bounded budget in cells.
    Cells(u32),
    /// No upper bound, e.g. the scrolling dimension of a viewport.
    Unbounded,
}

impl Limit {
    /// The budget in cells, `None` when unbounded.
    pub fn cells(self) -> Option<u32> {
        match self {
            Self::Cells(n) => Some(n),
            Self::Unbounded => None,
        }
    }

    /// True for a bounded budget.
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Cells(_))
    }

    /// Subtract cells from the budget. Bounded budgets saturate at zero;
    /// an unbounded budget absorbs any subtraction.
    pub fn saturating_sub(self, n: u32) -> Self {
        match self {
            Self::Cells(have) => Self::Cells(have.saturating_sub(n)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Clamp a value to the budget. Unbounded budgets pass it through.
    pub fn clamp(self, value: u32) -> u32 {
        match self {
            Self::Cells(have) => value.min(have),
            Self::Unbounded => value,
        }
    }
}

impl From<u32> for Limit {
    fn from(n: u32) -> Self {
        Self::Cells(n)
    }
}

/// A two-dimensional space budget handed down during sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Horizontal budget.
    pub w: Limit,
    /// Vertical budget.
    pub h: Limit,
}

impl Extent {
    /// Construct an extent from two limits.
    pub fn new(w: Limit, h: Limit) -> Self {
        Self { w, h }
    }

    /// A fully bounded extent.
    pub fn bounded(w: u32, h: u32) -> Self {
        Self {
            w: Limit::Cells(w),
            h: Limit::Cells(h),
        }
    }

    /// The budget along the given axis.
    pub fn main(&self, axis: Axis) -> Limit {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// The budget perpendicular to the given axis.
    pub fn cross(&self, axis: Axis) -> Limit {
        self.main(axis.cross())
    }

    /// Build an extent from main- and cross-axis budgets.
    pub fn from_main_cross(axis: Axis, main: Limit, cross: Limit) -> Self {
        match axis {
            Axis::Horizontal => Self { w: main, h: cross },
            Axis::Vertical => Self { w: cross, h: main },
        }
    }

    /// Shrink both budgets, saturating. Unbounded dimensions are
    /// unaffected.
    pub fn shrink(&self, dw: u32, dh: u32) -> Self {
        Self {
            w: self.w.saturating_sub(dw),
            h: self.h.saturating_sub(dh),
        }
    }
}

impl From<Expanse> for Extent {
    fn from(e: Expanse) -> Self {
        Self::bounded(e.w, e.h)
    }
}

/// Failure to measure leaf content. Fatal to the layout pass that
/// triggered it.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
#[error("{message}")]
pub struct MeasureError {
    /// Human-readable failure description.
    message: String,
}

impl MeasureError {
    /// Construct a measurement error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Collaborator that sizes leaf content (text, spans) within an available
/// width.
pub trait Measure {
    /// Measure rendered content within `available_width`, returning its
    /// cell size.
    fn measure(&self, content: &str, available_width: Limit)
    -> Result<Expanse, MeasureError>;
}

/// Bundled measurement collaborator based on `unicode-width`.
///
/// Lines wider than the available width wrap greedily at cell boundaries.
/// This handles display-width-aware monospace text; callers with shaping
/// requirements supply their own [`Measure`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMeasure;

impl Measure for TextMeasure {
    fn measure(
        &self,
        content: &str,
        available_width: Limit,
    ) -> Result<Expanse, MeasureError> {
        let mut width = 0u32;
        let mut rows = 0u32;
        for line in content.lines() {
            let (line_width, line_rows) = wrap_line(line, available_width);
            width = width.max(line_width);
            rows += line_rows;
        }
        Ok(Expanse::new(width, rows))
    }
}

/// Greedily wrap a single line, returning its widest row and row count.
fn wrap_line(line: &str, available: Limit) -> (u32, u32) {
    let total: u32 = line.chars().map(|c| c.width().unwrap_or(0) as u32).sum();
    let Some(avail) = available.cells() else {
        return (total, 1);
    };
    if avail == 0 {
        // Nothing fits; report a single zero-width row rather than
        // looping.
        return (0, 1);
    }
    if total <= avail {
        return (total, 1);
    }

    let mut rows = 1u32;
    let mut row_width = 0u32;
    let mut max_row = 0u32;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0) as u32;
        if row_width + ch_width > avail && row_width > 0 {
            max_row = max_row.max(row_width);
            rows += 1;
            row_width = 0;
        }
        row_width += ch_width;
    }
    max_row = max_row.max(row_width);
    // A single glyph wider than the budget gets its own row; the reported
    // width never exceeds the budget.
    (max_row.min(avail), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_arithmetic() {
        assert_eq!(Limit::Cells(5).saturating_sub(7), Limit::Cells(0));
        assert_eq!(Limit::Cells(5).saturating_sub(2), Limit::Cells(3));
        assert_eq!(Limit::Unbounded.saturating_sub(100), Limit::Unbounded);
        assert_eq!(Limit::Cells(5).clamp(9), 5);
        assert_eq!(Limit::Unbounded.clamp(9), 9);
    }

    #[test]
    fn extent_axes() {
        let extent = Extent::new(Limit::Cells(3), Limit::Unbounded);
        assert_eq!(extent.main(Axis::Horizontal), Limit::Cells(3));
        assert_eq!(extent.main(Axis::Vertical), Limit::Unbounded);
        assert_eq!(extent.cross(Axis::Vertical), Limit::Cells(3));
        assert_eq!(
            Extent::from_main_cross(Axis::Vertical, Limit::Cells(1), Limit::Cells(2)),
            Extent::bounded(2, 1)
        );
    }

    #[test]
    fn measures_single_line() {
        let measured = TextMeasure.measure("Hello", Limit::Cells(80)).unwrap();
        assert_eq!(measured, Expanse::new(5, 1));
    }

    #[test]
    fn measures_multiline() {
        let measured = TextMeasure.measure("one\nthree", Limit::Unbounded).unwrap();
        assert_eq!(measured, Expanse::new(5, 2));
    }

    #[test]
    fn wraps_to_available_width() {
        let measured = TextMeasure.measure("abcdefgh", Limit::Cells(3)).unwrap();
        assert_eq!(measured, Expanse::new(3, 3));
    }

    #[test]
    fn wide_glyphs_count_double() {
        // CJK glyphs occupy two cells each.
        let measured = TextMeasure.measure("界界", Limit::Cells(80)).unwrap();
        assert_eq!(measured, Expanse::new(4, 1));
    }

    #[test]
    fn glyph_wider_than_budget_clamps_to_budget() {
        // A double-width glyph against a one-cell budget occupies its own
        // row but never reports more width than is available.
        let measured = TextMeasure.measure("界界", Limit::Cells(1)).unwrap();
        assert_eq!(measured, Expanse::new(1, 2));
    }

    #[test]
    fn empty_content_is_zero() {
        let measured = TextMeasure.measure("", Limit::Cells(80)).unwrap();
        assert_eq!(measured, Expanse::new(0, 0));
    }
}
