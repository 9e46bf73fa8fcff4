// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod actions;
pub mod build;
pub mod harness;
pub mod resources;
pub mod state;
pub mod window;

/// Subset of viewport types shared with the binary (mesh data, bounds, camera).
/// GL rendering and overlays stay in the binary crate.
pub mod viewport {
    pub mod bounds;
    pub mod camera;
    pub mod mesh;
}
