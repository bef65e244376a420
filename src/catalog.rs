//! Syncing rendered icons into the iOS asset catalog.
//!
//! Every icon gets an `icon_<key>.imageset` directory holding the PNG and a
//! `Contents.json` descriptor:
//!
//! ```json
//! {
//!   "images": [
//!     { "idiom": "universal", "filename": "icon_home.png", "scale": "1x" },
//!     { "idiom": "universal", "scale": "2x" },
//!     { "idiom": "universal", "scale": "3x" }
//!   ],
//!   "info": { "version": 1, "author": "xcode" }
//! }
//! ```
//!
//! Only the 1x slot carries a file; 2x and 3x stay declared but empty until
//! artwork is supplied from a design tool.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::IconKey;

/// Name of the descriptor inside each image set.
pub const CONTENTS_FILE: &str = "Contents.json";

// ============================================================================
// Contents.json
// ============================================================================

/// One density slot of an image set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSlot {
    pub idiom: String,

    /// File bound to this slot, absent for unfilled densities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    pub scale: String,
}

impl ImageSlot {
    fn universal(scale: &str, filename: Option<String>) -> Self {
        Self {
            idiom: "universal".to_string(),
            filename,
            scale: scale.to_string(),
        }
    }
}

/// The `info` block identifying the descriptor format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub version: u32,
    pub author: String,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

/// Serializable `Contents.json` of an image set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSetContents {
    pub images: Vec<ImageSlot>,
    pub info: CatalogInfo,
}

impl ImageSetContents {
    /// Descriptor for `key`: 1x bound to `icon_<key>.png`, 2x and 3x declared only.
    pub fn for_icon(key: IconKey) -> Self {
        Self {
            images: vec![
                ImageSlot::universal("1x", Some(key.file_name())),
                ImageSlot::universal("2x", None),
                ImageSlot::universal("3x", None),
            ],
            info: CatalogInfo::default(),
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Syncing
// ============================================================================

/// Outcome of a successful [`sync_catalog`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// PNG paths inside the catalog, in key order.
    pub synced: Vec<PathBuf>,
}

/// Creates `icon_<key>.imageset` under `catalog_dir` and writes its descriptor.
///
/// Returns where the icon's PNG belongs inside the image set.
pub fn ensure_imageset(catalog_dir: &Path, key: IconKey) -> Result<PathBuf> {
    let imageset_dir = catalog_dir.join(format!("{}.imageset", key.asset_name()));
    fs::create_dir_all(&imageset_dir)
        .map_err(|e| Error::io("create directory", &imageset_dir, e))?;

    let contents_path = imageset_dir.join(CONTENTS_FILE);
    let json = ImageSetContents::for_icon(key).to_json()?;
    fs::write(&contents_path, json).map_err(|e| Error::io("write", &contents_path, e))?;

    Ok(imageset_dir.join(key.file_name()))
}

/// Copies `icon_<key>.png` from `source_dir` into the catalog for every key.
///
/// Keys are processed in order. A missing source stops the run with
/// [`Error::MissingSource`] before anything is written for that key; keys
/// synced earlier stay in place.
pub fn sync_catalog<I, F>(
    keys: I,
    source_dir: &Path,
    catalog_dir: &Path,
    mut on_synced: F,
) -> Result<SyncReport>
where
    I: IntoIterator<Item = IconKey>,
    F: FnMut(IconKey, &Path, &Path),
{
    let mut report = SyncReport::default();
    for key in keys {
        let source = source_dir.join(key.file_name());
        if !source.is_file() {
            return Err(Error::MissingSource { path: source });
        }

        let target = ensure_imageset(catalog_dir, key)?;
        fs::copy(&source, &target).map_err(|e| Error::Copy {
            from: source.clone(),
            to: target.clone(),
            source: e,
        })?;
        tracing::info!(icon = %key, target = %target.display(), "icon synced");
        on_synced(key, &source, &target);
        report.synced.push(target);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_declares_three_densities() {
        let contents = ImageSetContents::for_icon(IconKey::Coffee);
        assert_eq!(contents.images.len(), 3);
        assert_eq!(contents.images[0].filename.as_deref(), Some("icon_coffee.png"));
        assert_eq!(contents.images[0].scale, "1x");
        assert!(contents.images[1..].iter().all(|slot| slot.filename.is_none()));
        assert_eq!(contents.info, CatalogInfo { version: 1, author: "xcode".into() });
    }

    #[test]
    fn descriptor_json_layout() {
        let json = ImageSetContents::for_icon(IconKey::Home).to_json().unwrap();
        let expected = r#"{
  "images": [
    {
      "idiom": "universal",
      "filename": "icon_home.png",
      "scale": "1x"
    },
    {
      "idiom": "universal",
      "scale": "2x"
    },
    {
      "idiom": "universal",
      "scale": "3x"
    }
  ],
  "info": {
    "version": 1,
    "author": "xcode"
  }
}
"#;
        assert_eq!(json, expected);
        assert_eq!(
            ImageSetContents::from_json(&json).unwrap(),
            ImageSetContents::for_icon(IconKey::Home)
        );
    }

    #[test]
    fn ensure_imageset_writes_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let target = ensure_imageset(dir.path(), IconKey::Art).unwrap();

        let imageset = dir.path().join("icon_art.imageset");
        assert_eq!(target, imageset.join("icon_art.png"));
        let written = fs::read_to_string(imageset.join(CONTENTS_FILE)).unwrap();
        assert_eq!(
            ImageSetContents::from_json(&written).unwrap(),
            ImageSetContents::for_icon(IconKey::Art)
        );
    }

    #[test]
    fn missing_source_names_the_icon() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog");
        let err = sync_catalog([IconKey::Walk], dir.path(), &catalog, |_, _, _| {}).unwrap_err();
        match err {
            Error::MissingSource { path } => assert!(path.ends_with("icon_walk.png")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!catalog.join("icon_walk.imageset").exists());
    }

    #[test]
    fn failed_copy_names_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("icons");
        fs::create_dir_all(&icons).unwrap();
        fs::write(icons.join("icon_home.png"), b"png").unwrap();

        // A directory squatting on the target path makes the copy fail.
        let catalog = dir.path().join("catalog");
        let blocked = catalog.join("icon_home.imageset/icon_home.png");
        fs::create_dir_all(&blocked).unwrap();

        let err = sync_catalog([IconKey::Home], &icons, &catalog, |_, _, _| {}).unwrap_err();
        match &err {
            Error::Copy { from, to, .. } => {
                assert_eq!(from, &icons.join("icon_home.png"));
                assert_eq!(to, &blocked);
            }
            other => panic!("unexpected error: {other}"),
        }
        let message = err.to_string();
        assert!(message.contains(&blocked.display().to_string()), "{message}");
    }
}
