//! Native window construction

use crate::resources::{self, ResourceLocator};
use crate::state::WindowSettings;

/// Build the root viewport: title, sizes and icon.
///
/// A missing or unreadable icon is logged and the window is built without one.
/// The viewport icon doubles as the taskbar icon.
pub fn viewport_builder(settings: &WindowSettings, locator: &ResourceLocator) -> egui::ViewportBuilder {
    let builder = egui::ViewportBuilder::default()
        .with_title(settings.title.clone())
        .with_inner_size(settings.inner_size)
        .with_min_inner_size(settings.min_inner_size);

    match resources::window_icon(locator) {
        Some(icon) => builder.with_icon(icon),
        None => builder,
    }
}

/// Native options for `eframe::run_native`
pub fn native_options(settings: &WindowSettings, locator: &ResourceLocator) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: viewport_builder(settings, locator),
        ..Default::default()
    }
}
