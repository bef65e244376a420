//! Project directory layout the pipeline reads from and writes to.

use std::path::{Path, PathBuf};

/// Generated icons, relative to the project root.
pub const ICONS_DIR: &str = "assets/icons";

/// Event icon group inside the iOS asset catalog, relative to the project root.
pub const CATALOG_DIR: &str = "ios/Assets.xcassets/EventIcons";

/// Resolves the fixed asset locations under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where rendered `icon_<key>.png` files live.
    pub fn icons_dir(&self) -> PathBuf {
        self.root.join(ICONS_DIR)
    }

    /// Where `icon_<key>.imageset` directories are created.
    pub fn catalog_dir(&self) -> PathBuf {
        self.root.join(CATALOG_DIR)
    }

    /// Shortens `path` to be relative to the root, for status output.
    pub fn display_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_under_root() {
        let paths = AssetPaths::new("/tmp/app");
        assert_eq!(paths.icons_dir(), PathBuf::from("/tmp/app/assets/icons"));
        assert_eq!(
            paths.catalog_dir(),
            PathBuf::from("/tmp/app/ios/Assets.xcassets/EventIcons")
        );
    }

    #[test]
    fn relative_display() {
        let paths = AssetPaths::new("/tmp/app");
        let target = paths.catalog_dir().join("icon_home.imageset/icon_home.png");
        assert_eq!(
            paths.display_relative(&target),
            Path::new("ios/Assets.xcassets/EventIcons/icon_home.imageset/icon_home.png")
        );
        assert_eq!(paths.display_relative(Path::new("/elsewhere")), Path::new("/elsewhere"));
    }
}
