//! Locating bundled resources (the window icon) on disk.
//!
//! The base directory depends on how the toolbox was launched:
//!
//! - **Source**: run from the developer tree, resources live next to the
//!   crate sources. A copied binary whose build tree is gone looks next to
//!   the executable instead.
//! - **Bundle**: run from a packaged distributable whose launcher extracted
//!   the resources to a temporary directory and exported its path in
//!   [`BUNDLE_DIR_ENV`].
//!
//! The base is computed once at startup and passed around explicitly as a
//! [`ResourceLocator`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable set by the bundle launcher to its extraction directory
pub const BUNDLE_DIR_ENV: &str = "MCM_TOOLBOX_BUNDLE_DIR";

/// Window and taskbar icon, relative to the resource base
pub const ICON_PATH: &str = "resources/icon.ico";

/// How the process was launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Source,
    Bundle,
}

/// Resolves resource-relative paths against a fixed base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    mode: RunMode,
    base_dir: PathBuf,
}

impl ResourceLocator {
    /// Detect the run mode from the process environment
    pub fn detect() -> Self {
        let locator = Self::from_marker(std::env::var_os(BUNDLE_DIR_ENV), source_dir());
        tracing::info!(
            mode = ?locator.mode,
            base = %locator.base_dir.display(),
            "Resource base directory"
        );
        locator
    }

    /// Pick the base directory from an optional bundle marker.
    /// An empty marker counts as absent.
    pub fn from_marker(marker: Option<OsString>, source_dir: impl Into<PathBuf>) -> Self {
        match marker.filter(|m| !m.is_empty()) {
            Some(dir) => Self {
                mode: RunMode::Bundle,
                base_dir: absolutize(PathBuf::from(dir)),
            },
            None => Self {
                mode: RunMode::Source,
                base_dir: absolutize(source_dir.into()),
            },
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute path of a resource. The file may not exist.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(relative)
    }

    pub fn icon_path(&self) -> PathBuf {
        self.resolve(ICON_PATH)
    }
}

/// Directory holding the crate sources (and its `resources/` folder)
fn source_dir() -> PathBuf {
    pick_source_dir(Path::new(env!("CARGO_MANIFEST_DIR")), exe_directory())
}

/// The build-time crate directory when it exists on this machine,
/// otherwise the directory of the running executable.
fn pick_source_dir(manifest_dir: &Path, exe_dir: Option<PathBuf>) -> PathBuf {
    if manifest_dir.is_dir() {
        return manifest_dir.to_path_buf();
    }
    exe_dir.unwrap_or_else(|| PathBuf::from("."))
}

fn exe_directory() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode icon {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decode an icon file (ICO or PNG) into RGBA pixels
pub fn load_icon(path: &Path) -> Result<egui::IconData, IconError> {
    if !path.is_file() {
        return Err(IconError::NotFound(path.to_path_buf()));
    }
    let image = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(egui::IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Load the application icon, logging a warning and returning None on failure
pub fn window_icon(locator: &ResourceLocator) -> Option<egui::IconData> {
    match load_icon(&locator.icon_path()) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("Continuing without window icon: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_marker_selects_extraction_dir() {
        let tmp = std::env::temp_dir().join("mcm_bundle_x");
        let loc = ResourceLocator::from_marker(Some(tmp.clone().into_os_string()), "/src/tree");
        assert_eq!(loc.mode(), RunMode::Bundle);
        assert_eq!(loc.icon_path(), tmp.join("resources").join("icon.ico"));
    }

    #[test]
    fn test_no_marker_selects_source_dir() {
        let src = std::env::temp_dir().join("mcm_src_tree");
        let loc = ResourceLocator::from_marker(None, src.clone());
        assert_eq!(loc.mode(), RunMode::Source);
        assert_eq!(loc.icon_path(), src.join("resources").join("icon.ico"));
    }

    #[test]
    fn test_empty_marker_is_ignored() {
        let src = std::env::temp_dir().join("mcm_src_tree");
        let loc = ResourceLocator::from_marker(Some(OsString::new()), src.clone());
        assert_eq!(loc.mode(), RunMode::Source);
        assert_eq!(loc.base_dir(), src.as_path());
    }

    #[test]
    fn test_relative_marker_becomes_absolute() {
        let loc = ResourceLocator::from_marker(Some(OsString::from("bundle")), "/unused");
        assert!(loc.base_dir().is_absolute());
        assert!(loc.base_dir().ends_with("bundle"));
    }

    #[test]
    fn test_source_dir_is_crate_dir() {
        assert!(source_dir().join("Cargo.toml").is_file());
    }

    #[test]
    fn test_missing_build_tree_falls_back_to_exe_dir() {
        let gone = std::env::temp_dir().join("mcm_build_tree_gone");
        let exe_dir = std::env::temp_dir().join("mcm_install");
        assert_eq!(pick_source_dir(&gone, Some(exe_dir.clone())), exe_dir);
        assert_eq!(pick_source_dir(&gone, None), PathBuf::from("."));
    }

    #[test]
    fn test_exe_directory_contains_test_binary() {
        let dir = exe_directory().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(exe.parent(), Some(dir.as_path()));
    }

    #[test]
    fn test_missing_icon_is_not_found() {
        let path = std::env::temp_dir().join("mcm_definitely_missing").join("icon.ico");
        match load_icon(&path) {
            Err(IconError::NotFound(p)) => assert_eq!(p, path),
            Err(other) => panic!("expected NotFound, got {other}"),
            Ok(_) => panic!("expected NotFound, got an icon"),
        }
    }
}
