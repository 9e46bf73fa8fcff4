//! Integration tests for ToolboxHarness.
//!
//! Drives the sidebar actions and the close path headlessly.

use mcm_toolbox_lib::harness::ToolboxHarness;
use mcm_toolbox_lib::state::{CanvasContent, CanvasLifecycle};
use mcm_toolbox_lib::viewport::camera::ArcBallCamera;
use shared::Color;

#[test]
fn test_initial_canvas() {
    let h = ToolboxHarness::new();
    assert_eq!(h.content(), CanvasContent::Empty);
    assert_eq!(h.scene().background, Color::WHITE);
    assert!(h.scene().axes_visible);
    assert_eq!(h.status_text(), Some("Ready for Data..."));
    assert_eq!(*h.camera(), ArcBallCamera::new());
}

#[test]
fn test_draw_sphere_is_idempotent() {
    let mut once = ToolboxHarness::new();
    once.click_draw_sphere();

    let mut twice = ToolboxHarness::new();
    twice.click_draw_sphere();
    twice.click_draw_sphere();

    assert_eq!(twice.mesh_count(), 1);
    assert_eq!(once.scene(), twice.scene());
    assert_eq!(once.export_scene_json(), twice.export_scene_json());
    assert_eq!(once.camera(), twice.camera());
}

#[test]
fn test_draw_sphere_frames_camera() {
    let mut h = ToolboxHarness::new();
    h.click_draw_sphere();
    assert_eq!(h.camera().target, glam::Vec3::ZERO);
    assert!(h.camera().distance < ArcBallCamera::new().distance);
    assert_eq!(h.status_text(), Some("Model: 3D Sphere"));
}

#[test]
fn test_clear_after_draw() {
    let mut h = ToolboxHarness::new();
    h.click_draw_sphere();
    h.click_clear();

    assert_eq!(h.mesh_count(), 0);
    assert_eq!(h.content(), CanvasContent::Empty);
    assert_eq!(h.scene().background, Color::WHITE);
    assert!(h.scene().axes_visible);
}

#[test]
fn test_toggle_between_states() {
    let mut h = ToolboxHarness::new();
    for _ in 0..3 {
        h.click_draw_sphere();
        assert_eq!(h.content(), CanvasContent::ShowingSphere);
        h.click_clear();
        assert_eq!(h.content(), CanvasContent::Empty);
    }
}

#[test]
fn test_build_tracks_scene() {
    let mut h = ToolboxHarness::new();
    h.build();
    assert_eq!(h.built_mesh_count(), 0);

    h.click_draw_sphere();
    h.build();
    assert_eq!(h.built_mesh_count(), 1);

    // No scene change, no rebuild
    let rebuilds = h.rebuild_count();
    h.build();
    assert_eq!(h.rebuild_count(), rebuilds);

    h.click_clear();
    h.build();
    assert_eq!(h.built_mesh_count(), 0);
}

#[test]
fn test_close_releases_exactly_once() {
    let mut h = ToolboxHarness::new();
    h.click_draw_sphere();
    assert!(h.frame(false));
    assert_eq!(h.release_count(), 0);

    // Close request frame releases and stops drawing
    assert!(!h.frame(true));
    assert_eq!(h.release_count(), 1);
    assert!(!h.frame(false));

    // Exit hook runs after the close request
    assert!(!h.exit());
    assert_eq!(h.release_count(), 1);
    assert_eq!(h.state.canvas.lifecycle(), CanvasLifecycle::Closed);
}

#[test]
fn test_exit_without_close_request_releases() {
    let mut h = ToolboxHarness::new();
    assert!(h.frame(false));
    assert!(h.exit());
    assert_eq!(h.release_count(), 1);
}

#[test]
fn test_export_scene_json() {
    let mut h = ToolboxHarness::new();
    h.click_draw_sphere();
    let json = h.export_scene_json();
    let scene: shared::SceneDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(&scene, h.scene());
    assert!(json.contains(r#""type": "sphere""#));
}
