//! The circular backdrop drawn behind every pictogram.

use resvg::tiny_skia::PathBuilder;

use super::Draw;
use super::shape::Bounds;
use crate::canvas::{CANVAS_SIZE, Canvas};

/// Distance between the plate's bounding box and each canvas edge.
pub const PLATE_INSET: u32 = 16;

/// Width of the plate's outline.
pub const PLATE_OUTLINE_WIDTH: f32 = 4.0;

/// Paints the plate: a filled circle inset [`PLATE_INSET`] from every edge,
/// outlined on the inside of its bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plate;

impl Plate {
    /// The plate's bounding box.
    pub fn bounds() -> Bounds {
        let near = PLATE_INSET as f32;
        let far = (CANVAS_SIZE - PLATE_INSET) as f32;
        Bounds::new(near, near, far, far)
    }
}

impl Draw for Plate {
    fn draw(&self, canvas: &mut Canvas) {
        let palette = *canvas.palette();
        let bounds = Plate::bounds();

        if let Some(disc) = bounds.inset(0.0).and_then(PathBuilder::from_oval) {
            canvas.fill(&disc, palette.plate_fill);
        }
        if let Some(ring) = bounds
            .inset(PLATE_OUTLINE_WIDTH / 2.0)
            .and_then(PathBuilder::from_oval)
        {
            canvas.stroke(&ring, palette.plate_outline, PLATE_OUTLINE_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;

    fn plate_only() -> Canvas {
        let mut canvas = Canvas::new(Palette::standard().unwrap()).unwrap();
        Plate.draw(&mut canvas);
        canvas
    }

    #[test]
    fn plate_fill_at_center() {
        let canvas = plate_only();
        assert_eq!(canvas.pixel(64, 64), Some(canvas.palette().plate_fill));
    }

    #[test]
    fn plate_outline_on_rim() {
        let canvas = plate_only();
        // Leftmost part of the ring, mid height.
        assert_eq!(canvas.pixel(17, 64), Some(canvas.palette().plate_outline));
    }

    #[test]
    fn transparent_outside_inset() {
        let canvas = plate_only();
        let size = CANVAS_SIZE;
        for i in 0..size {
            for edge in 0..PLATE_INSET {
                assert_eq!(canvas.pixel(edge, i).unwrap()[3], 0, "left ({edge}, {i})");
                assert_eq!(canvas.pixel(i, edge).unwrap()[3], 0, "top ({i}, {edge})");
                let far = size - 1 - edge;
                assert_eq!(canvas.pixel(far, i).unwrap()[3], 0, "right ({far}, {i})");
                assert_eq!(canvas.pixel(i, far).unwrap()[3], 0, "bottom ({i}, {far})");
            }
        }
    }
}
