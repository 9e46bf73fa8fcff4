mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::actions`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use mcm_toolbox_lib::actions;
pub use mcm_toolbox_lib::build;
pub use mcm_toolbox_lib::resources;
pub use mcm_toolbox_lib::state;
pub use mcm_toolbox_lib::window;

use app::ToolboxApp;
use resources::ResourceLocator;
use state::AppSettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcm_toolbox=info,mcm_toolbox_lib=info".into()),
        )
        .init();

    // Resolved once, then passed to whoever needs resources
    let locator = ResourceLocator::detect();
    let settings = AppSettings::default();
    let native_options = window::native_options(&settings.window, &locator);

    if let Err(e) = eframe::run_native(
        "mcm-toolbox",
        native_options,
        Box::new(move |cc| Ok(Box::new(ToolboxApp::new(cc, settings)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
