//! Software wireframe rendering, used when no GL context is available

use std::collections::HashMap;

use egui::{Color32, Rect, Stroke, Ui};
use shared::{ObjectId, SceneDescription};

use super::camera::ArcBallCamera;
use super::mesh;
use crate::build::BuiltMesh;

/// Paint the 3D viewport using egui's painter (wireframe rendering)
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &ArcBallCamera,
    scene: &SceneDescription,
    meshes: &HashMap<ObjectId, BuiltMesh>,
) {
    let painter = ui.painter_at(rect);

    let [r, g, b] = scene.background.0;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));

    for scene_mesh in &scene.meshes {
        let Some(built) = meshes.get(&scene_mesh.id) else {
            continue;
        };
        let alpha = (built.opacity * 255.0) as u8;
        let stroke = match built.edges.as_ref() {
            Some(_) => {
                let [r, g, b] = scene_mesh.style.edge_color.0;
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(r, g, b, alpha))
            }
            None => {
                let [r, g, b] = scene_mesh.style.color.0;
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(r, g, b, alpha))
            }
        };

        let owned;
        let lines = match built.edges.as_ref() {
            Some(edges) => edges,
            None => {
                owned = mesh::edges(&built.surface, [0.0; 4]);
                &owned
            }
        };

        for i in 0..lines.segment_count() {
            let (a, b) = lines.segment(i);
            if let (Some(pa), Some(pb)) = (
                camera.project(a.to_array(), rect),
                camera.project(b.to_array(), rect),
            ) {
                painter.line_segment([pa, pb], stroke);
            }
        }
    }
}
