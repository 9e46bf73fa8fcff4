//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
mod overlays;
mod renderer;

pub use mcm_toolbox_lib::viewport::{camera, mesh};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::build::MeshCache;
use crate::state::CanvasState;
use gl_renderer::GlRenderer;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    mesh_cache: MeshCache,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            gl_renderer: None,
            mesh_cache: MeshCache::new(),
        }
    }

    /// Initialize GL renderer (must be called with a GL context).
    /// On failure the viewport keeps using the software renderer.
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using wireframe fallback: {e}"),
        }
    }

    /// Delete all GL objects. Without a context the handles are only dropped.
    pub fn destroy_gl(&mut self, gl: Option<&glow::Context>) {
        let Some(renderer) = self.gl_renderer.take() else {
            return;
        };
        let Some(gl) = gl else {
            tracing::debug!("No GL context at shutdown; skipping GL object deletion");
            return;
        };
        let result = renderer.lock().map(|mut r| r.destroy(gl));
        if let Err(e) = result {
            tracing::error!("GL renderer lock poisoned at shutdown: {e}");
        }
    }

    pub fn show(&mut self, ui: &mut Ui, canvas: &mut CanvasState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        // ── Camera controls ─────────────────────────────
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            canvas.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            let scale = canvas.camera.distance * 0.002;
            canvas.camera.pan(-delta.x * scale, delta.y * scale);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                canvas.camera.zoom(scroll * 0.01);
            }
        }
        if response.double_clicked() {
            canvas.reset_camera();
        }

        // ── Tessellate changed scene ────────────────────
        let scene = &canvas.scene;
        self.mesh_cache.sync(&scene.scene, scene.version());

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render(ui, rect, canvas);
        self.draw_overlays(ui, rect, canvas);
    }

    fn render(&self, ui: &mut Ui, rect: egui::Rect, canvas: &CanvasState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // Fallback: software wireframe rendering
            renderer::paint_viewport(
                ui,
                rect,
                &canvas.camera,
                &canvas.scene.scene,
                self.mesh_cache.meshes(),
            );
            return;
        };

        let renderer = Arc::clone(gl_renderer);
        let camera = canvas.camera;
        let meshes = self.mesh_cache.shared_meshes();
        let version = self.mesh_cache.rebuild_count();
        let bg_color = canvas.scene.scene.background.0;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer.lock() {
                    r.sync_from_meshes(gl, &meshes, version);
                    let params = gl_renderer::RenderParams { viewport, bg_color };
                    r.paint(gl, &camera, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, canvas: &CanvasState) {
        let painter = ui.painter_at(rect);
        let scene = &canvas.scene.scene;

        if scene.axes_visible {
            overlays::draw_axes_widget(
                &painter,
                rect,
                &canvas.camera,
                canvas.defaults.axes_widget_size,
                canvas.defaults.axes_thickness,
            );
        }

        overlays::draw_texts(&painter, rect, scene);

        if scene.meshes.is_empty() {
            overlays::draw_nav_hint(&painter, rect);
        }
    }
}
