pub mod canvas;
pub mod scene;
pub mod settings;

pub use canvas::{CanvasContent, CanvasLifecycle, CanvasState, CloseTrigger};
pub use scene::SceneState;
pub use settings::{AppSettings, CanvasDefaults, SidebarLabels, WindowSettings};

/// Combined application state
pub struct AppState {
    pub canvas: CanvasState,
    pub settings: AppSettings,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            canvas: CanvasState::new(settings.canvas.clone()),
            settings,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
