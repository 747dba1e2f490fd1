use crate::{Edges, Expanse, Point};

/// A rectangle with a location and size in integer cell units.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Rect {
    /// Construct a new rectangle.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point::new(x, y),
            w,
            h,
        }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Place an expanse at a point.
    pub fn at(tl: Point, size: Expanse) -> Self {
        Self {
            tl,
            w: size.w,
            h: size.h,
        }
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// True when the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// One past the right-most column.
    pub fn far_x(&self) -> u32 {
        self.tl.x + self.w
    }

    /// One past the bottom-most row.
    pub fn far_y(&self) -> u32 {
        self.tl.y + self.h
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x && p.x < self.far_x() && p.y >= self.tl.y && p.y < self.far_y()
    }

    /// Does this rectangle fully contain another? Empty rectangles are
    /// contained anywhere.
    pub fn contains_rect(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.far_x() <= self.far_x()
            && other.far_y() <= self.far_y()
    }

    /// The interior rectangle after removing a uniform border. Saturates to
    /// an empty rectangle when the border does not fit.
    pub fn inner(&self, border: u32) -> Self {
        Self {
            tl: Point::new(self.tl.x + border, self.tl.y + border),
            w: self.w.saturating_sub(border * 2),
            h: self.h.saturating_sub(border * 2),
        }
    }

    /// The interior rectangle after removing per-side insets. Saturates to
    /// an empty rectangle when the insets do not fit.
    pub fn shrink(&self, edges: Edges) -> Self {
        Self {
            tl: Point::new(self.tl.x + edges.left, self.tl.y + edges.top),
            w: self.w.saturating_sub(edges.horizontal()),
            h: self.h.saturating_sub(edges.vertical()),
        }
    }

    /// The overlap of this rectangle with another. When the rectangles are
    /// disjoint the result is empty, positioned at the clamped origin.
    pub fn intersect(&self, other: Self) -> Self {
        let x1 = self.tl.x.max(other.tl.x);
        let y1 = self.tl.y.max(other.tl.y);
        let x2 = self.far_x().min(other.far_x());
        let y2 = self.far_y().min(other.far_y());
        Self {
            tl: Point::new(x1, y1),
            w: x2.saturating_sub(x1),
            h: y2.saturating_sub(y1),
        }
    }

    /// Iterate over the cells covered by this rectangle, left-to-right,
    /// top-to-bottom.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let rect = *self;
        (rect.tl.y..rect.far_y())
            .flat_map(move |y| (rect.tl.x..rect.far_x()).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn inner() {
        let rect = Rect::new(0, 0, 10, 10);
        assert_eq!(rect.inner(1), Rect::new(1, 1, 8, 8));
        assert!(Rect::new(0, 0, 1, 1).inner(1).is_empty());
    }

    #[test]
    fn shrink() {
        let rect = Rect::new(2, 2, 10, 10);
        assert_eq!(rect.shrink(Edges::new(1, 2, 3, 4)), Rect::new(3, 5, 7, 3));
        assert!(Rect::new(0, 0, 2, 2).shrink(Edges::all(2)).is_empty());
    }

    #[test]
    fn contains() {
        let rect = Rect::new(10, 10, 10, 10);
        assert!(rect.contains_point(Point::new(10, 10)));
        assert!(!rect.contains_point(Point::new(9, 10)));
        assert!(!rect.contains_point(Point::new(20, 20)));
        assert!(rect.contains_point(Point::new(19, 19)));
    }

    #[test]
    fn intersect() {
        let rect = Rect::new(0, 0, 10, 10);
        assert_eq!(rect.intersect(Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
        assert!(rect.intersect(Rect::new(20, 20, 5, 5)).is_empty());
        assert_eq!(rect.intersect(rect), rect);
    }

    #[test]
    fn cells_order() {
        let rect = Rect::new(1, 1, 2, 2);
        let cells: Vec<Point> = rect.cells().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
    }

    proptest! {
        #[test]
        fn intersect_is_contained(
            ax in 0u32..50, ay in 0u32..50, aw in 0u32..50, ah in 0u32..50,
            bx in 0u32..50, by in 0u32..50, bw in 0u32..50, bh in 0u32..50,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            let isect = a.intersect(b);
            prop_assert!(isect.w <= a.w && isect.h <= a.h);
            prop_assert!(isect.w <= b.w && isect.h <= b.h);
            if !isect.is_empty() {
                prop_assert!(a.contains_rect(&isect));
                prop_assert!(b.contains_rect(&isect));
            }
        }

        #[test]
        fn inner_never_grows(x in 0u32..50, y in 0u32..50, w in 0u32..50, h in 0u32..50, border in 0u32..10) {
            let rect = Rect::new(x, y, w, h);
            let inner = rect.inner(border);
            prop_assert!(inner.w <= rect.w);
            prop_assert!(inner.h <= rect.h);
        }
    }
}
