//! Main application module

mod styles;

use eframe::egui;

use crate::state::{AppSettings, AppState};
use crate::ui::sidebar;
use crate::viewport::ViewportPanel;

/// Main application
pub struct ToolboxApp {
    state: AppState,
    viewport: ViewportPanel,
}

impl ToolboxApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let state = AppState::new(settings);

        styles::configure_styles(&cc.egui_ctx, state.settings.window.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        tracing::info!("Main window ready");

        Self { state, viewport }
    }
}

impl eframe::App for ToolboxApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Release GL objects while the context is still alive; the close proceeds
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        let gl = frame.gl().map(|gl| gl.as_ref());
        let viewport = &mut self.viewport;
        if !self
            .state
            .canvas
            .begin_frame(close_requested, || viewport.destroy_gl(gl))
        {
            return;
        }

        // ── Left panel: Sidebar ──────────────────────────────
        egui::SidePanel::left("sidebar")
            .exact_width(self.state.settings.window.sidebar_width)
            .resizable(false)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                sidebar::show(ui, &mut self.state);
            });

        // ── Central panel: 3D canvas ─────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state.canvas);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        let viewport = &mut self.viewport;
        self.state.canvas.on_exit(|| viewport.destroy_gl(gl));
    }
}
