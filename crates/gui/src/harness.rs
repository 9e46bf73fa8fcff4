//! Headless test harness that drives the toolbox without a window.
//!
//! Drives the same sidebar actions and close handling as the app, and exposes
//! the resulting scene, camera and built meshes for assertions.

use shared::{SceneDescription, TextPosition};

use crate::actions;
use crate::build::MeshCache;
use crate::state::{AppState, CanvasContent};
use crate::viewport::camera::ArcBallCamera;

/// Headless harness: app state, mesh cache and release bookkeeping
pub struct ToolboxHarness {
    pub state: AppState,
    cache: MeshCache,
    releases: usize,
}

impl Default for ToolboxHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolboxHarness {
    /// Harness with a freshly constructed canvas
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            cache: MeshCache::new(),
            releases: 0,
        }
    }

    // ── Button clicks ─────────────────────────────────────────

    pub fn click_draw_sphere(&mut self) {
        actions::draw_sphere(&mut self.state.canvas);
    }

    pub fn click_clear(&mut self) {
        actions::clear_canvas(&mut self.state.canvas);
    }

    // ── Window events ─────────────────────────────────────────

    /// Run the per-frame close check the app runs. Returns whether the
    /// canvas would be drawn.
    pub fn frame(&mut self, close_requested: bool) -> bool {
        let releases = &mut self.releases;
        self.state
            .canvas
            .begin_frame(close_requested, || *releases += 1)
    }

    /// Run the app's shutdown hook. Returns whether it released resources.
    pub fn exit(&mut self) -> bool {
        let releases = &mut self.releases;
        self.state.canvas.on_exit(|| *releases += 1)
    }

    /// Tessellate the current scene, as the viewport does each frame
    pub fn build(&mut self) {
        let scene = &self.state.canvas.scene;
        self.cache.sync(&scene.scene, scene.version());
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn scene(&self) -> &SceneDescription {
        &self.state.canvas.scene.scene
    }

    pub fn camera(&self) -> &ArcBallCamera {
        &self.state.canvas.camera
    }

    pub fn content(&self) -> CanvasContent {
        self.state.canvas.content()
    }

    pub fn mesh_count(&self) -> usize {
        self.state.canvas.scene.mesh_count()
    }

    /// Number of meshes built by the last `build()`
    pub fn built_mesh_count(&self) -> usize {
        self.cache.meshes().len()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.cache.rebuild_count()
    }

    pub fn status_text(&self) -> Option<&str> {
        self.scene()
            .text_at(TextPosition::UpperLeft)
            .map(|t| t.text.as_str())
    }

    /// How many times rendering resources were released
    pub fn release_count(&self) -> usize {
        self.releases
    }

    /// Export the current scene as JSON
    pub fn export_scene_json(&self) -> String {
        serde_json::to_string_pretty(self.scene()).unwrap_or_default()
    }
}
