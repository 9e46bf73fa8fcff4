//! Canvas state: scene, camera and lifecycle of the embedded 3D view

use shared::{Color, MeshStyle, ObjectId, Primitive, TextPosition};

use super::scene::SceneState;
use super::settings::CanvasDefaults;
use crate::build::scene_bounds;
use crate::viewport::camera::ArcBallCamera;

/// What the canvas currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasContent {
    Empty,
    ShowingSphere,
}

/// Whether rendering resources are still held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasLifecycle {
    Open,
    Closed,
}

/// Which window event asked the canvas to release its resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The user closed the window; the GL context is still current
    CloseRequested,
    /// The event loop is shutting down
    Exit,
}

/// Scene, camera and lifecycle of the canvas
pub struct CanvasState {
    pub scene: SceneState,
    pub camera: ArcBallCamera,
    pub defaults: CanvasDefaults,
    lifecycle: CanvasLifecycle,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(CanvasDefaults::default())
    }
}

impl CanvasState {
    /// Fresh canvas: default background, axis indicator and placeholder text
    pub fn new(defaults: CanvasDefaults) -> Self {
        let mut canvas = Self {
            scene: SceneState::default(),
            camera: ArcBallCamera::new(),
            defaults,
            lifecycle: CanvasLifecycle::Open,
        };
        canvas.set_background(canvas.defaults.background);
        canvas.add_axes();
        let placeholder = canvas.defaults.placeholder_text.clone();
        canvas.add_text(&placeholder, TextPosition::UpperLeft, canvas.defaults.text_color);
        canvas
    }

    /// Remove meshes, texts and the axis indicator
    pub fn clear(&mut self) {
        self.scene.clear();
    }

    pub fn set_background(&mut self, color: Color) {
        self.scene.set_background(color);
    }

    /// Show the axis indicator
    pub fn add_axes(&mut self) {
        self.scene.set_axes_visible(true);
    }

    pub fn add_mesh(&mut self, name: &str, primitive: Primitive, style: MeshStyle) -> ObjectId {
        self.scene.add_mesh(name, primitive, style)
    }

    /// Place text at a corner, replacing any text already there
    pub fn add_text(&mut self, text: &str, position: TextPosition, color: Color) {
        let mut overlay = self.defaults.status_text(text);
        overlay.position = position;
        overlay.color = color;
        self.scene.set_text(overlay);
    }

    /// Restore default orientation and frame all meshes
    pub fn reset_camera(&mut self) {
        self.camera.frame(scene_bounds(&self.scene.scene));
    }

    pub fn content(&self) -> CanvasContent {
        let has_sphere = self
            .scene
            .scene
            .meshes
            .iter()
            .any(|m| matches!(m.primitive, Primitive::Sphere { .. }));
        if has_sphere {
            CanvasContent::ShowingSphere
        } else {
            CanvasContent::Empty
        }
    }

    pub fn lifecycle(&self) -> CanvasLifecycle {
        self.lifecycle
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle == CanvasLifecycle::Open
    }

    /// Per-frame close handling.
    ///
    /// Releases resources when the window asked to close and returns
    /// whether the canvas should still be drawn this frame.
    pub fn begin_frame(&mut self, close_requested: bool, release: impl FnOnce()) -> bool {
        if close_requested {
            self.close(CloseTrigger::CloseRequested, release);
        }
        self.is_open()
    }

    /// Shutdown hook. Releases resources unless a close request already did.
    pub fn on_exit(&mut self, release: impl FnOnce()) -> bool {
        self.close(CloseTrigger::Exit, release)
    }

    /// Release rendering resources and mark the canvas closed.
    ///
    /// `release` runs only on the first call. Returns whether this call
    /// performed the release.
    pub fn close(&mut self, trigger: CloseTrigger, release: impl FnOnce()) -> bool {
        if self.lifecycle == CanvasLifecycle::Closed {
            tracing::debug!(?trigger, "Canvas already released");
            return false;
        }
        release();
        self.lifecycle = CanvasLifecycle::Closed;
        tracing::info!(?trigger, "Canvas rendering resources released");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let c = CanvasState::default();
        assert_eq!(c.scene.scene.background, Color::WHITE);
        assert!(c.scene.scene.axes_visible);
        assert_eq!(c.content(), CanvasContent::Empty);
        let text = c.scene.text_at(TextPosition::UpperLeft).unwrap();
        assert_eq!(text.text, "Ready for Data...");
        assert_eq!(text.color, Color::BLACK);
        assert!(c.is_open());
    }

    #[test]
    fn test_content_follows_meshes() {
        let mut c = CanvasState::default();
        c.add_mesh("s", Primitive::Sphere { radius: 1.0, center: [0.0; 3] }, MeshStyle::default());
        assert_eq!(c.content(), CanvasContent::ShowingSphere);
        c.clear();
        assert_eq!(c.content(), CanvasContent::Empty);
    }

    #[test]
    fn test_close_releases_once() {
        let mut c = CanvasState::default();
        let mut released = 0;
        assert!(c.close(CloseTrigger::CloseRequested, || released += 1));
        assert!(!c.close(CloseTrigger::Exit, || released += 1));
        assert_eq!(released, 1);
        assert_eq!(c.lifecycle(), CanvasLifecycle::Closed);
    }

    #[test]
    fn test_begin_frame_draws_until_close_requested() {
        let mut c = CanvasState::default();
        let mut released = 0;
        assert!(c.begin_frame(false, || released += 1));
        assert_eq!(released, 0);
        assert!(!c.begin_frame(true, || released += 1));
        assert!(!c.begin_frame(false, || released += 1));
        assert_eq!(released, 1);
    }

    #[test]
    fn test_exit_without_close_request_releases() {
        let mut c = CanvasState::default();
        let mut released = 0;
        assert!(c.on_exit(|| released += 1));
        assert_eq!(released, 1);
        assert!(!c.is_open());
    }

    #[test]
    fn test_reset_camera_empty_scene_is_default() {
        let mut c = CanvasState::default();
        c.camera.rotate(45.0, 20.0);
        c.reset_camera();
        assert_eq!(c.camera, ArcBallCamera::new());
    }
}
