use crate::{Axis, Point, Rect};

/// A width and height without a location: the size of a `Rect` considered
/// on its own.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Expanse {
    /// Construct a new expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// A `Rect` of this size positioned at the origin.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this size can completely enclose the target size in both
    /// dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// The extent of this expanse along the given axis.
    pub fn main(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// The extent of this expanse perpendicular to the given axis.
    pub fn cross(&self, axis: Axis) -> u32 {
        self.main(axis.cross())
    }

    /// Build an expanse from main- and cross-axis extents.
    pub fn from_main_cross(axis: Axis, main: u32, cross: u32) -> Self {
        match axis {
            Axis::Horizontal => Self { w: main, h: cross },
            Axis::Vertical => Self { w: cross, h: main },
        }
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_cross() {
        let e = Expanse::new(3, 7);
        assert_eq!(e.main(Axis::Horizontal), 3);
        assert_eq!(e.main(Axis::Vertical), 7);
        assert_eq!(e.cross(Axis::Horizontal), 7);
        assert_eq!(e.cross(Axis::Vertical), 3);
    }

    #[test]
    fn from_main_cross_round_trips() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let e = Expanse::from_main_cross(axis, 5, 9);
            assert_eq!(e.main(axis), 5);
            assert_eq!(e.cross(axis), 9);
        }
    }

    #[test]
    fn contains() {
        assert!(Expanse::new(5, 5).contains(&Expanse::new(5, 5)));
        assert!(Expanse::new(5, 5).contains(&Expanse::new(2, 3)));
        assert!(!Expanse::new(5, 5).contains(&Expanse::new(6, 3)));
    }
}
