//! Batch rendering of the icon registry to PNG files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::color::Palette;
use crate::error::{Error, Result};
use crate::layer::Draw;
use crate::registry::{IconKey, Registry};

/// Outcome of a successful [`render_all`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Files written, in registry order.
    pub written: Vec<PathBuf>,
}

/// Draws `drawer` onto a fresh canvas.
pub fn render_icon(drawer: &impl Draw, palette: Palette) -> Result<Canvas> {
    let mut canvas = Canvas::new(palette)?;
    drawer.draw(&mut canvas);
    Ok(canvas)
}

/// Draws a key's line art alone, without the plate.
pub fn render_glyph(key: IconKey, palette: Palette) -> Result<Canvas> {
    render_icon(&key.glyph(), palette)
}

/// Renders every registry entry into `out_dir` as `icon_<key>.png`.
///
/// The directory is created if needed and existing files are overwritten.
/// `on_written` runs after each file lands. The first failure aborts the run
/// and is returned; files written before it stay on disk.
pub fn render_all<F>(registry: &Registry, out_dir: &Path, mut on_written: F) -> Result<RenderReport>
where
    F: FnMut(IconKey, &Path),
{
    let palette = Palette::standard()?;
    fs::create_dir_all(out_dir).map_err(|e| Error::io("create directory", out_dir, e))?;

    let mut report = RenderReport::default();
    for (key, drawer) in registry.iter() {
        let canvas = render_icon(drawer, palette)?;
        let path = out_dir.join(key.file_name());
        canvas.save_png(&path)?;
        tracing::info!(icon = %key, path = %path.display(), "icon rendered");
        on_written(key, &path);
        report.written.push(path);
    }

    tracing::debug!(count = report.written.len(), dir = %out_dir.display(), "render complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CANVAS_SIZE;

    fn palette() -> Palette {
        Palette::standard().unwrap()
    }

    #[test]
    fn every_icon_keeps_plate_and_clear_corners() {
        let registry = Registry::builtin();
        let last = CANVAS_SIZE - 1;
        for (key, drawer) in registry.iter() {
            let canvas = render_icon(drawer, palette()).unwrap();
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(canvas.pixel(x, y).unwrap()[3], 0, "{key} corner ({x}, {y})");
            }
            // Plate sits under the whole middle of the canvas.
            for (x, y) in [(64, 64), (40, 40), (88, 88)] {
                assert_eq!(canvas.pixel(x, y).unwrap()[3], 255, "{key} plate ({x}, {y})");
            }
        }
    }

    #[test]
    fn glyph_alone_leaves_background_clear() {
        let canvas = render_glyph(IconKey::Life, palette()).unwrap();
        // Inside the leaf outline but off the veins.
        assert_eq!(canvas.pixel(76, 80).unwrap()[3], 0);
        assert_eq!(canvas.pixel(64, 64), Some(palette().ink));
    }

    #[test]
    fn rendering_is_deterministic() {
        let registry = Registry::builtin();
        for (key, drawer) in registry.iter() {
            let a = render_icon(drawer, palette()).unwrap().to_rgba_image();
            let b = render_icon(drawer, palette()).unwrap().to_rgba_image();
            assert!(a == b, "{key} differs between renders");
        }
    }

    #[test]
    fn render_all_creates_directory_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("icons");
        let registry = Registry::with_keys(&[IconKey::Home, IconKey::Moon]);

        let mut seen = Vec::new();
        let report = render_all(&registry, &out, |key, _| seen.push(key)).unwrap();

        assert_eq!(seen, vec![IconKey::Home, IconKey::Moon]);
        assert_eq!(
            report.written,
            vec![out.join("icon_home.png"), out.join("icon_moon.png")]
        );
        assert!(report.written.iter().all(|p| p.is_file()));
    }

    #[test]
    fn render_all_fails_fast_when_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("icons");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let mut calls = 0;
        let err = render_all(&Registry::builtin(), &blocker, |_, _| calls += 1).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(calls, 0);
    }
}
