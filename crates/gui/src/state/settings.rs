//! Application settings
//!
//! All values are compile-time defaults; the toolbox reads no settings file.

use shared::{Color, MeshStyle, TextOverlay, TextPosition};

/// Top-level window and sidebar layout
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    /// Initial inner size [width, height]
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub sidebar_width: f32,
    pub button_height: f32,
    /// Base font size in points
    pub font_size: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "MCM Visualization Tool".to_string(),
            inner_size: [1200.0, 800.0],
            min_inner_size: [800.0, 500.0],
            sidebar_width: 250.0,
            button_height: 40.0,
            font_size: 14.0,
        }
    }
}

/// Sidebar labels
#[derive(Debug, Clone)]
pub struct SidebarLabels {
    pub heading: String,
    pub draw_sphere: String,
    pub clear_canvas: String,
    pub credits: String,
}

impl Default for SidebarLabels {
    fn default() -> Self {
        Self {
            heading: "Toolbox".to_string(),
            draw_sphere: "🌍 Draw 3D Sphere".to_string(),
            clear_canvas: "🗑 Clear Canvas".to_string(),
            credits: "MCM 2026 Toolbox\nv1.0.0 Build".to_string(),
        }
    }
}

/// Fixed literals used by the canvas and its demo actions
#[derive(Debug, Clone)]
pub struct CanvasDefaults {
    pub background: Color,
    pub placeholder_text: String,
    pub sphere_text: String,
    pub text_color: Color,
    pub text_size: f32,
    pub sphere_radius: f64,
    pub sphere_style: MeshStyle,
    /// Arm length of the corner axis indicator, in points
    pub axes_widget_size: f32,
    pub axes_thickness: f32,
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            placeholder_text: "Ready for Data...".to_string(),
            sphere_text: "Model: 3D Sphere".to_string(),
            text_color: Color::BLACK,
            text_size: 14.0,
            sphere_radius: 0.5,
            sphere_style: MeshStyle {
                color: Color::ORANGE,
                opacity: 0.8,
                show_edges: true,
                edge_color: Color::BLACK,
            },
            axes_widget_size: 40.0,
            axes_thickness: 2.0,
        }
    }
}

impl CanvasDefaults {
    /// Upper-left status annotation with the default color and size
    pub fn status_text(&self, text: &str) -> TextOverlay {
        TextOverlay {
            text: text.to_string(),
            position: TextPosition::UpperLeft,
            color: self.text_color,
            font_size: self.text_size,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    pub window: WindowSettings,
    pub sidebar: SidebarLabels,
    pub canvas: CanvasDefaults,
}
