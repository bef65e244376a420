//! Stroke primitives and the shape scripts built from them.
//!
//! A [`Glyph`] is an ordered list of [`Shape`]s with literal coordinates.
//! Every shape is stroked in the palette's ink color using one of the
//! [`Weight`] tiers; nothing is ever filled.
//!
//! Bounding boxes are `[x0, y0, x1, y1]`. Closed outlines (ellipses,
//! rectangles, arcs) keep their stroke inside the box; open lines and
//! polygons are stroked centered on their points.

use resvg::tiny_skia::{Path as SkPath, PathBuilder, Rect};

use super::Draw;
use crate::canvas::Canvas;

/// Stroke width of the bold outline tier.
pub const BOLD_WIDTH: f32 = 6.0;

/// Bezier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Weight
// ============================================================================

/// Stroke width tier.
///
/// `Bold` outlines the main silhouette and `Thin` (one unit narrower) draws
/// interior detail. `Fine` and `Hairline` are reserved for the handful of
/// tiny marks that would clog at small sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Bold,
    Thin,
    Fine,
    Hairline,
}

impl Weight {
    /// Returns the stroke width in canvas units.
    pub fn width(self) -> f32 {
        match self {
            Weight::Bold => BOLD_WIDTH,
            Weight::Thin => BOLD_WIDTH - 1.0,
            Weight::Fine => BOLD_WIDTH - 2.0,
            Weight::Hairline => 1.0,
        }
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// An axis-aligned box in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Shrinks the box by `amount` on every side.
    ///
    /// Returns `None` when nothing positive is left.
    pub fn inset(&self, amount: f32) -> Option<Rect> {
        let (l, t) = (self.x0 + amount, self.y0 + amount);
        let (r, b) = (self.x1 - amount, self.y1 - amount);
        if r <= l || b <= t {
            return None;
        }
        Rect::from_ltrb(l, t, r, b)
    }
}

impl From<[i32; 4]> for Bounds {
    fn from([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self::new(x0 as f32, y0 as f32, x1 as f32, y1 as f32)
    }
}

/// A point in canvas units.
pub type Point = (f32, f32);

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| (x as f32, y as f32)).collect()
}

// ============================================================================
// Shape
// ============================================================================

/// A single stroked primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Open polyline through the points.
    Line { points: Vec<Point>, weight: Weight },
    /// Closed outline through the points.
    Polygon { points: Vec<Point>, weight: Weight },
    /// Ellipse inscribed in the box.
    Ellipse { bounds: Bounds, weight: Weight },
    /// Rectangle outline.
    Rect { bounds: Bounds, weight: Weight },
    /// Rectangle outline with rounded corners.
    RoundedRect {
        bounds: Bounds,
        radius: f32,
        weight: Weight,
    },
    /// Part of the inscribed ellipse, from `start` to `end` degrees clockwise
    /// from three o'clock.
    Arc {
        bounds: Bounds,
        start: f32,
        end: f32,
        weight: Weight,
    },
}

impl Shape {
    pub fn weight(&self) -> Weight {
        match self {
            Shape::Line { weight, .. }
            | Shape::Polygon { weight, .. }
            | Shape::Ellipse { weight, .. }
            | Shape::Rect { weight, .. }
            | Shape::RoundedRect { weight, .. }
            | Shape::Arc { weight, .. } => *weight,
        }
    }

    /// Builds the stroke path, or `None` for degenerate geometry.
    pub fn path(&self) -> Option<SkPath> {
        let half = self.weight().width() / 2.0;
        match self {
            Shape::Line { points, .. } => polyline(points, false),
            Shape::Polygon { points, .. } => polyline(points, true),
            Shape::Ellipse { bounds, .. } => PathBuilder::from_oval(bounds.inset(half)?),
            Shape::Rect { bounds, .. } => Some(PathBuilder::from_rect(bounds.inset(half)?)),
            Shape::RoundedRect { bounds, radius, .. } => {
                rounded_rect(bounds.inset(half)?, radius - half)
            }
            Shape::Arc {
                bounds, start, end, ..
            } => arc(bounds.inset(half)?, *start, *end),
        }
    }
}

impl Draw for Shape {
    fn draw(&self, canvas: &mut Canvas) {
        let Some(path) = self.path() else {
            tracing::debug!(shape = ?self, "skipping degenerate shape");
            return;
        };
        let ink = canvas.palette().ink;
        canvas.stroke(&path, ink, self.weight().width());
    }
}

fn polyline(points: &[Point], closed: bool) -> Option<SkPath> {
    let (&(x, y), rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x, y);
    for &(x, y) in rest {
        pb.line_to(x, y);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

fn rounded_rect(rect: Rect, radius: f32) -> Option<SkPath> {
    let r = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}

/// Returns the arc sweep in degrees, wrapping `end` past `start` and capping
/// at one full turn.
pub fn arc_sweep(start: f32, end: f32) -> f32 {
    let mut end = end;
    while end < start {
        end += 360.0;
    }
    (end - start).min(360.0)
}

fn arc(rect: Rect, start: f32, end: f32) -> Option<SkPath> {
    let sweep = arc_sweep(start, end);
    if sweep <= 0.0 {
        return None;
    }

    let (rx, ry) = (rect.width() / 2.0, rect.height() / 2.0);
    let (cx, cy) = (rect.left() + rx, rect.top() + ry);
    let at = |u: f32, v: f32| (cx + rx * u, cy + ry * v);

    // One cubic per quarter turn at most.
    let segments = (sweep / 90.0).ceil().max(1.0) as u32;
    let step = (sweep / segments as f32).to_radians();
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut pb = PathBuilder::new();
    let mut a0 = start.to_radians();
    let (x, y) = at(a0.cos(), a0.sin());
    pb.move_to(x, y);
    for _ in 0..segments {
        let a1 = a0 + step;
        let (c0, s0) = (a0.cos(), a0.sin());
        let (c1, s1) = (a1.cos(), a1.sin());
        let (x1, y1) = at(c0 - k * s0, s0 + k * c0);
        let (x2, y2) = at(c1 + k * s1, s1 - k * c1);
        let (x3, y3) = at(c1, s1);
        pb.cubic_to(x1, y1, x2, y2, x3, y3);
        a0 = a1;
    }
    pb.finish()
}

// ============================================================================
// Glyph
// ============================================================================

/// The line art of one icon: shapes drawn in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    shapes: Vec<Shape>,
}

impl Glyph {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn push(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Open polyline through `coords`.
    pub fn line(self, coords: &[(i32, i32)], weight: Weight) -> Self {
        self.push(Shape::Line {
            points: points(coords),
            weight,
        })
    }

    /// Closed outline through `coords`.
    pub fn polygon(self, coords: &[(i32, i32)], weight: Weight) -> Self {
        self.push(Shape::Polygon {
            points: points(coords),
            weight,
        })
    }

    pub fn ellipse(self, bounds: [i32; 4], weight: Weight) -> Self {
        self.push(Shape::Ellipse {
            bounds: bounds.into(),
            weight,
        })
    }

    pub fn rect(self, bounds: [i32; 4], weight: Weight) -> Self {
        self.push(Shape::Rect {
            bounds: bounds.into(),
            weight,
        })
    }

    pub fn rounded_rect(self, bounds: [i32; 4], radius: i32, weight: Weight) -> Self {
        self.push(Shape::RoundedRect {
            bounds: bounds.into(),
            radius: radius as f32,
            weight,
        })
    }

    pub fn arc(self, bounds: [i32; 4], start: i32, end: i32, weight: Weight) -> Self {
        self.push(Shape::Arc {
            bounds: bounds.into(),
            start: start as f32,
            end: end as f32,
            weight,
        })
    }
}

impl Draw for Glyph {
    fn draw(&self, canvas: &mut Canvas) {
        tracing::debug!(shapes = self.shapes.len(), "drawing glyph");
        for shape in &self.shapes {
            shape.draw(canvas);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
