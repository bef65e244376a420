//! Drawing layers composed onto an icon canvas.
//!
//! Everything that paints implements [`Draw`]. An icon is two layers: the
//! shared [`Plate`] backdrop and the icon's own [`Glyph`]. [`Plated`] stacks
//! them so the plate always goes down first.

pub mod plate;
pub mod shape;

pub use plate::{PLATE_INSET, PLATE_OUTLINE_WIDTH, Plate};
pub use shape::{BOLD_WIDTH, Bounds, Glyph, Point, Shape, Weight};

use crate::canvas::Canvas;

// ============================================================================
// Draw
// ============================================================================

/// Something that paints onto a [`Canvas`].
///
/// Implementations only touch the canvas they are given; drawing the same
/// value twice on fresh canvases yields identical pixels.
pub trait Draw {
    fn draw(&self, canvas: &mut Canvas);
}

impl<F: Fn(&mut Canvas)> Draw for F {
    fn draw(&self, canvas: &mut Canvas) {
        self(canvas)
    }
}

// ============================================================================
// Plated
// ============================================================================

/// Draws the [`Plate`] and then the wrapped drawer on the same canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Plated<D> {
    inner: D,
}

impl<D: Draw> Plated<D> {
    /// Returns the wrapped drawer.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Draw> Draw for Plated<D> {
    fn draw(&self, canvas: &mut Canvas) {
        Plate.draw(canvas);
        self.inner.draw(canvas);
    }
}

/// Wraps `drawer` so the plate is painted underneath it.
pub fn with_plate<D: Draw>(drawer: D) -> Plated<D> {
    Plated { inner: drawer }
}
