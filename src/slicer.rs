//! Cutting a hand-drawn sprite sheet into individual icon files.
//!
//! The sheet is a 4 x 7 grid read row-major. Each cell is written under the
//! output name paired with its index in [`SHEET_MAPPING`]; names do not have
//! to match the generated icons' file names.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageFormat};

use crate::error::{Error, Result};
use crate::geometry::{RectPx, SizePx};
use crate::registry::IconKey;

/// Columns in the sprite sheet.
pub const SHEET_COLUMNS: u32 = 4;

/// Rows in the sprite sheet.
pub const SHEET_ROWS: u32 = 7;

/// Cell order of the sheet: the icon each cell depicts and the file stem it is saved as.
pub const SHEET_MAPPING: [(IconKey, &str); 28] = [
    (IconKey::Work, "icon_work"),
    (IconKey::Love, "icon_love"),
    (IconKey::Celebration, "icon_celebration"),
    (IconKey::Graduation, "icon_graduation"),
    (IconKey::Fitness, "icon_fitness"),
    (IconKey::Home, "icon_home"),
    (IconKey::Music, "icon_music"),
    (IconKey::Eating, "icon_meal"),
    (IconKey::Eating, "icon_meal_steam"),
    (IconKey::Game, "icon_game"),
    (IconKey::Coffee, "icon_breakfast"),
    (IconKey::Pizza, "icon_pizza"),
    (IconKey::Travel, "icon_beach"),
    (IconKey::Moon, "icon_moon"),
    (IconKey::Picnic, "icon_picnic"),
    (IconKey::Thinking, "icon_think"),
    (IconKey::Soccer, "icon_soccer"),
    (IconKey::Walk, "icon_walk"),
    (IconKey::Art, "icon_paint"),
    (IconKey::Phone, "icon_phone"),
    (IconKey::Flight, "icon_flight"),
    (IconKey::Archery, "icon_target"),
    (IconKey::Swimming, "icon_swim"),
    (IconKey::Flower, "icon_flower"),
    (IconKey::Study, "icon_study"),
    (IconKey::Life, "icon_life"),
    (IconKey::Birthday, "icon_birthday"),
    (IconKey::Toilet, "icon_toilet"),
];

// ============================================================================
// SpriteGrid
// ============================================================================

/// A uniform grid laid over a sheet.
///
/// Cell sizes use floor division, so remainder pixels on the right and bottom
/// edges belong to no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteGrid {
    pub columns: u32,
    pub rows: u32,
}

impl SpriteGrid {
    /// The 4 x 7 layout of the event icon sheet.
    pub const EVENT_SHEET: SpriteGrid = SpriteGrid {
        columns: SHEET_COLUMNS,
        rows: SHEET_ROWS,
    };

    /// Number of cells, or `None` for a grid with no cells or more than `u32::MAX`.
    pub fn cell_count(&self) -> Option<u32> {
        self.columns.checked_mul(self.rows).filter(|&count| count > 0)
    }

    /// Size of one cell on `sheet`, or `None` when the grid has a zero dimension.
    pub fn cell_size(&self, sheet: SizePx) -> Option<SizePx> {
        Some(SizePx::new(
            sheet.width.checked_div(self.columns)?,
            sheet.height.checked_div(self.rows)?,
        ))
    }

    /// Returns the rectangle of cell `index`, counted row-major.
    pub fn cell_rect(&self, sheet: SizePx, index: u32) -> Option<RectPx> {
        if index >= self.cell_count()? {
            return None;
        }
        let cell = self.cell_size(sheet)?;
        let (row, col) = (index / self.columns, index % self.columns);
        Some(RectPx::new(col * cell.width, row * cell.height, cell.width, cell.height))
    }
}

// ============================================================================
// Slicing
// ============================================================================

/// Outcome of a successful [`slice_sheet`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    /// Dimensions of the input sheet.
    pub sheet: SizePx,
    /// Dimensions of every written cell.
    pub cell: SizePx,
    /// Files written, in cell order.
    pub written: Vec<PathBuf>,
}

impl SliceReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Slices the sheet at `input` into `out_dir` using [`SpriteGrid::EVENT_SHEET`]
/// and [`SHEET_MAPPING`].
///
/// A missing input is reported before anything is created on disk.
/// `on_written` receives the cell index, the depicted icon and the output path.
pub fn slice_sheet<F>(input: &Path, out_dir: &Path, on_written: F) -> Result<SliceReport>
where
    F: FnMut(usize, IconKey, &Path),
{
    slice_with(SpriteGrid::EVENT_SHEET, &SHEET_MAPPING, input, out_dir, on_written)
}

/// Slices `input` into `out_dir` with an explicit grid and mapping.
///
/// Only the first `min(grid.cell_count(), mapping.len())` cells are written.
/// A grid without cells is rejected before the input is read.
pub fn slice_with<F>(
    grid: SpriteGrid,
    mapping: &[(IconKey, &str)],
    input: &Path,
    out_dir: &Path,
    mut on_written: F,
) -> Result<SliceReport>
where
    F: FnMut(usize, IconKey, &Path),
{
    if grid.cell_count().is_none() {
        return Err(Error::InvalidGrid {
            columns: grid.columns,
            rows: grid.rows,
        });
    }
    if !input.exists() {
        return Err(Error::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let sheet_image = image::open(input).map_err(|e| Error::image(input, e))?;
    let (width, height) = sheet_image.dimensions();
    let sheet = SizePx::new(width, height);
    let cell = grid.cell_size(sheet).ok_or(Error::InvalidGrid {
        columns: grid.columns,
        rows: grid.rows,
    })?;
    tracing::debug!(
        width,
        height,
        cell_width = cell.width,
        cell_height = cell.height,
        "sheet loaded"
    );

    if cell.is_empty() {
        return Err(Error::SheetTooSmall {
            width,
            height,
            columns: grid.columns,
            rows: grid.rows,
        });
    }

    fs::create_dir_all(out_dir).map_err(|e| Error::io("create directory", out_dir, e))?;

    let mut written = Vec::new();
    for (index, &(key, stem)) in mapping.iter().enumerate() {
        let Some(rect) = grid.cell_rect(sheet, index as u32) else {
            break;
        };
        let path = out_dir.join(format!("{stem}.png"));
        sheet_image
            .crop_imm(rect.x, rect.y, rect.width, rect.height)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| Error::image(&path, e))?;
        tracing::info!(index, icon = %key, path = %path.display(), "cell written");
        on_written(index, key, &path);
        written.push(path);
    }

    Ok(SliceReport {
        sheet,
        cell,
        written,
    })
}
