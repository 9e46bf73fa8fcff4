//! Sidebar button actions

use shared::{Primitive, TextPosition};

use crate::state::CanvasState;

/// Replace the scene with a single demo sphere and frame it
pub fn draw_sphere(canvas: &mut CanvasState) {
    canvas.clear();
    canvas.add_axes();

    let defaults = &canvas.defaults;
    let primitive = Primitive::Sphere {
        radius: defaults.sphere_radius,
        center: [0.0; 3],
    };
    let style = defaults.sphere_style.clone();
    let text = defaults.sphere_text.clone();
    let text_color = defaults.text_color;

    canvas.add_mesh("Sphere", primitive, style);
    canvas.add_text(&text, TextPosition::UpperLeft, text_color);
    canvas.reset_camera();

    tracing::info!("Sphere drawn");
}

/// Empty the scene and restore the default background and axis indicator
pub fn clear_canvas(canvas: &mut CanvasState) {
    canvas.clear();
    canvas.set_background(canvas.defaults.background);
    canvas.add_axes();

    tracing::info!("Canvas cleared");
}
