/// Per-side insets in cells, used for padding and similar trims.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Edges {
    /// Left inset.
    pub left: u32,
    /// Right inset.
    pub right: u32,
    /// Top inset.
    pub top: u32,
    /// Bottom inset.
    pub bottom: u32,
}

impl Edges {
    /// Construct insets from individual sides.
    pub fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Uniform insets on all sides.
    pub fn all(n: u32) -> Self {
        Self::new(n, n, n, n)
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}
