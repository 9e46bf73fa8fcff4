//! Integration tests for resource resolution and window construction.

use std::ffi::OsString;
use std::io;
use std::sync::{Arc, Mutex};

use mcm_toolbox_lib::resources::{self, IconError, ResourceLocator, RunMode, ICON_PATH};
use mcm_toolbox_lib::state::WindowSettings;
use mcm_toolbox_lib::window;

#[test]
fn test_same_relative_path_both_modes() {
    let bundle = tempfile::tempdir().unwrap();
    let source = tempfile::tempdir().unwrap();

    let packaged = ResourceLocator::from_marker(
        Some(bundle.path().as_os_str().to_owned()),
        source.path(),
    );
    let dev = ResourceLocator::from_marker(None, source.path());

    assert_eq!(packaged.mode(), RunMode::Bundle);
    assert_eq!(dev.mode(), RunMode::Source);
    assert!(packaged.resolve(ICON_PATH).starts_with(bundle.path()));
    assert!(dev.resolve(ICON_PATH).starts_with(source.path()));
    assert!(packaged.resolve(ICON_PATH).ends_with("resources/icon.ico"));
    assert!(dev.resolve(ICON_PATH).ends_with("resources/icon.ico"));
}

#[test]
fn test_missing_icon_window_still_builds() {
    let dir = tempfile::tempdir().unwrap();
    let locator = ResourceLocator::from_marker(Some(OsString::from(dir.path())), "/unused");

    assert!(matches!(
        resources::load_icon(&locator.icon_path()),
        Err(IconError::NotFound(_))
    ));
    assert!(resources::window_icon(&locator).is_none());

    let options = window::native_options(&WindowSettings::default(), &locator);
    assert!(options.viewport.icon.is_none());
    assert_eq!(options.viewport.inner_size, Some(egui::vec2(1200.0, 800.0)));
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_missing_icon_logs_warning() {
    let dir = tempfile::tempdir().unwrap();
    let locator = ResourceLocator::from_marker(Some(OsString::from(dir.path())), "/unused");

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let icon = tracing::subscriber::with_default(subscriber, || resources::window_icon(&locator));
    assert!(icon.is_none());

    let output = logs.contents();
    let warning = output
        .lines()
        .find(|line| line.contains("WARN"))
        .unwrap_or_else(|| panic!("no warning logged: {output:?}"));
    assert!(warning.contains(&locator.icon_path().display().to_string()));
}

#[test]
fn test_undecodable_icon_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("resources")).unwrap();
    std::fs::write(dir.path().join(ICON_PATH), b"not an icon").unwrap();
    let locator = ResourceLocator::from_marker(Some(OsString::from(dir.path())), "/unused");

    assert!(matches!(
        resources::load_icon(&locator.icon_path()),
        Err(IconError::Decode { .. })
    ));
    let builder = window::viewport_builder(&WindowSettings::default(), &locator);
    assert!(builder.icon.is_none());
}

#[test]
fn test_bundled_icon_loads() {
    let locator = ResourceLocator::from_marker(None, env!("CARGO_MANIFEST_DIR"));
    let icon = resources::load_icon(&locator.icon_path()).unwrap();
    assert_eq!(icon.width, 32);
    assert_eq!(icon.height, 32);
    assert_eq!(icon.rgba.len(), 32 * 32 * 4);

    let builder = window::viewport_builder(&WindowSettings::default(), &locator);
    assert!(builder.icon.is_some());
}
