//! Integer cell geometry for sprite sheets.
//!
//! Everything here is whole pixels: the slicer floors cell sizes, so a cell
//! never straddles a pixel boundary.

/// One cell of a sheet: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// First column past the cell.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// First row past the cell.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether two cells claim a common pixel. Cells that only touch do not.
    pub fn overlaps(&self, other: &RectPx) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Pixel dimensions of a sheet or of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A sheet narrower or shorter than the grid floors to an empty cell.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
