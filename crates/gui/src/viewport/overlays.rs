//! Viewport overlay drawing (axis indicator, text annotations, hints)

use egui::{Align2, Color32, FontId, Painter, Rect, Stroke};
use glam::Vec3;
use shared::{SceneDescription, TextPosition};

use super::camera::ArcBallCamera;

const MARGIN: f32 = 8.0;

/// Orientation triad in the lower-left corner, rotating with the camera
pub fn draw_axes_widget(painter: &Painter, rect: Rect, camera: &ArcBallCamera, size: f32, thickness: f32) {
    let origin = egui::pos2(
        rect.left() + MARGIN + size,
        rect.bottom() - MARGIN - size,
    );
    let view = camera.view_matrix();

    let mut axes = [
        (Vec3::X, "X", Color32::from_rgb(220, 50, 50)),
        (Vec3::Y, "Y", Color32::from_rgb(50, 180, 50)),
        (Vec3::Z, "Z", Color32::from_rgb(50, 100, 220)),
    ]
    .map(|(dir, label, color)| (view.transform_vector3(dir), label, color));

    // Back to front so nearer arms overdraw farther ones
    axes.sort_by(|a, b| a.0.z.total_cmp(&b.0.z));

    for (v, label, color) in axes {
        let tip = origin + egui::vec2(v.x, -v.y) * size;
        painter.line_segment([origin, tip], Stroke::new(thickness, color));
        painter.text(tip, Align2::CENTER_CENTER, label, FontId::monospace(12.0), color);
    }
}

/// Text annotations anchored at the canvas corners
pub fn draw_texts(painter: &Painter, rect: Rect, scene: &SceneDescription) {
    for overlay in &scene.texts {
        let (pos, align) = match overlay.position {
            TextPosition::UpperLeft => (rect.left_top() + egui::vec2(MARGIN, MARGIN), Align2::LEFT_TOP),
            TextPosition::UpperRight => (rect.right_top() + egui::vec2(-MARGIN, MARGIN), Align2::RIGHT_TOP),
            TextPosition::LowerLeft => (rect.left_bottom() + egui::vec2(MARGIN, -MARGIN), Align2::LEFT_BOTTOM),
            TextPosition::LowerRight => (rect.right_bottom() + egui::vec2(-MARGIN, -MARGIN), Align2::RIGHT_BOTTOM),
        };
        let [r, g, b] = overlay.color.0;
        painter.text(
            pos,
            align,
            &overlay.text,
            FontId::proportional(overlay.font_size),
            Color32::from_rgb(r, g, b),
        );
    }
}

/// Mouse controls hint shown on an empty canvas
pub fn draw_nav_hint(painter: &Painter, rect: Rect) {
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        Align2::CENTER_BOTTOM,
        "Drag to orbit  |  Right-drag to pan  |  Scroll to zoom",
        FontId::proportional(11.0),
        Color32::from_rgb(140, 140, 150),
    );
}
