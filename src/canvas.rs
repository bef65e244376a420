//! Raster surface every icon is drawn onto.
//!
//! A [`Canvas`] wraps a fixed-size, fully transparent tiny-skia pixmap
//! together with the [`Palette`] the drawers paint with. Canvases are
//! created per icon and never shared; once the PNG is written the canvas is
//! dropped.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{FillRule, Paint, Path as SkPath, Pixmap, Stroke, Transform};

use crate::color::Palette;
use crate::error::{Error, Result};

/// Edge length of the square icon canvas, in pixels.
pub const CANVAS_SIZE: u32 = 128;

// ============================================================================
// Canvas
// ============================================================================

/// A transparent `CANVAS_SIZE` x `CANVAS_SIZE` drawing surface.
pub struct Canvas {
    pixmap: Pixmap,
    palette: Palette,
}

impl Canvas {
    /// Allocates a new transparent canvas bound to `palette`.
    pub fn new(palette: Palette) -> Result<Self> {
        let pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE).ok_or(Error::Canvas {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
        })?;
        Ok(Self { pixmap, palette })
    }

    /// Returns the colors drawers should paint with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Strokes `path` with a solid color, centered on the path.
    ///
    /// Geometry outside the canvas is clipped.
    pub fn stroke(&mut self, path: &SkPath, color: Rgba<u8>, width: f32) {
        let paint = solid_paint(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fills the interior of `path` with a solid color.
    pub fn fill(&mut self, path: &SkPath, color: Rgba<u8>) {
        let paint = solid_paint(color);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Returns the unpremultiplied color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        // tiny-skia only checks the flat index, so x past the edge would wrap.
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba([color.red(), color.green(), color.blue(), color.alpha()]))
    }

    /// Converts the canvas to an `image::RgbaImage` with straight alpha.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        // tiny-skia stores premultiplied alpha
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let color = pixels[(y * width + x) as usize].demultiply();
            Rgba([color.red(), color.green(), color.blue(), color.alpha()])
        })
    }

    /// Encodes the canvas as a 32-bit RGBA PNG at `path`, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::image(path, e))
    }
}

fn solid_paint(color: Rgba<u8>) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::tiny_skia::{PathBuilder, Rect};

    fn canvas() -> Canvas {
        Canvas::new(Palette::standard().unwrap()).unwrap()
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = canvas();
        assert_eq!(canvas.width(), CANVAS_SIZE);
        assert_eq!(canvas.height(), CANVAS_SIZE);
        let img = canvas.to_rgba_image();
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn fill_paints_solid_color() {
        let mut canvas = canvas();
        let rect = Rect::from_ltrb(10.0, 10.0, 20.0, 20.0).unwrap();
        canvas.fill(&PathBuilder::from_rect(rect), Rgba([255, 0, 0, 255]));

        assert_eq!(canvas.pixel(15, 15), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(canvas.pixel(30, 30).unwrap()[3], 0);
        assert_eq!(canvas.pixel(CANVAS_SIZE, 0), None);
    }

    #[test]
    fn pixel_past_right_edge_does_not_wrap() {
        let mut canvas = canvas();
        let rect = Rect::from_ltrb(0.0, 1.0, 1.0, 2.0).unwrap();
        canvas.fill(&PathBuilder::from_rect(rect), Rgba([255, 0, 0, 255]));

        assert_eq!(canvas.pixel(0, 1), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(canvas.pixel(CANVAS_SIZE, 0), None);
        assert_eq!(canvas.pixel(0, CANVAS_SIZE), None);
    }

    #[test]
    fn out_of_bounds_geometry_is_clipped() {
        let mut canvas = canvas();
        let mut pb = PathBuilder::new();
        pb.move_to(-50.0, 64.0);
        pb.line_to(500.0, 64.0);
        let path = pb.finish().unwrap();
        canvas.stroke(&path, Rgba([0, 0, 255, 255]), 6.0);

        assert_eq!(canvas.pixel(64, 64), Some(Rgba([0, 0, 255, 255])));
        assert_eq!(canvas.pixel(64, 10).unwrap()[3], 0);
    }

    #[test]
    fn rgba_image_matches_pixels() {
        let mut canvas = canvas();
        let rect = Rect::from_ltrb(0.0, 0.0, 4.0, 4.0).unwrap();
        canvas.fill(&PathBuilder::from_rect(rect), Rgba([10, 20, 30, 255]));
        let img = canvas.to_rgba_image();
        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(100, 100).0[3], 0);
    }

    #[test]
    fn save_png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        canvas().save_png(&path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), CANVAS_SIZE);
        assert_eq!(decoded.height(), CANVAS_SIZE);
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
    }
}
