//! miniday-icons: the event icon asset pipeline.
//!
//! This crate draws the flat line-art event icons onto a shared circular
//! plate, slices hand-drawn sprite sheets into per-icon files, and syncs the
//! generated PNGs into the iOS asset catalog.
//!
//! # Example
//!
//! ```no_run
//! use miniday_icons::{AssetPaths, Registry, render_all};
//!
//! let paths = AssetPaths::default();
//! let registry = Registry::builtin();
//! let report = render_all(&registry, &paths.icons_dir(), |key, path| {
//!     println!("{key} -> {}", path.display());
//! })?;
//! assert_eq!(report.written.len(), registry.len());
//! # Ok::<(), miniday_icons::Error>(())
//! ```
//!
//! # Drawing a single icon
//!
//! Every glyph can be rendered on its own, with or without the plate:
//!
//! ```
//! use miniday_icons::{IconKey, Palette, Registry, render_glyph, render_icon};
//!
//! let palette = Palette::standard().unwrap();
//! let registry = Registry::builtin();
//!
//! let plated = render_icon(registry.get(IconKey::Coffee).unwrap(), palette).unwrap();
//! let bare = render_glyph(IconKey::Coffee, palette).unwrap();
//! assert_eq!(plated.pixel(0, 0), bare.pixel(0, 0));
//! ```

mod canvas;
mod catalog;
mod color;
mod config;
mod error;
mod geometry;
pub mod glyphs;
mod layer;
mod registry;
mod render;
mod slicer;

#[cfg(feature = "cli")]
pub mod logging;

pub use canvas::{CANVAS_SIZE, Canvas};
pub use catalog::{
    CONTENTS_FILE, CatalogInfo, ImageSetContents, ImageSlot, SyncReport, ensure_imageset,
    sync_catalog,
};
pub use color::{ICON_INK, PLATE_FILL, PLATE_OUTLINE, Palette, rgba};
pub use config::{AssetPaths, CATALOG_DIR, ICONS_DIR};
pub use error::{Error, Result};
pub use geometry::{RectPx, SizePx};
pub use layer::{
    BOLD_WIDTH, Bounds, Draw, Glyph, PLATE_INSET, PLATE_OUTLINE_WIDTH, Plate, Plated, Point,
    Shape, Weight, with_plate,
};
pub use registry::{IconDrawer, IconKey, Registry, UnknownIconKey};
pub use render::{RenderReport, render_all, render_glyph, render_icon};
pub use slicer::{
    SHEET_COLUMNS, SHEET_MAPPING, SHEET_ROWS, SliceReport, SpriteGrid, slice_sheet, slice_with,
};
