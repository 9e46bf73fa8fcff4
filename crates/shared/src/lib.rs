use serde::{Deserialize, Serialize};

/// Unique identifier of a mesh in the scene
pub type ObjectId = String;

/// Geometric primitive that can be placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Sphere {
        radius: f64,
        #[serde(default)]
        center: [f64; 3],
    },
}

impl Primitive {
    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> ([f64; 3], [f64; 3]) {
        match self {
            Primitive::Sphere { radius, center } => (
                [center[0] - radius, center[1] - radius, center[2] - radius],
                [center[0] + radius, center[1] + radius, center[2] + radius],
            ),
        }
    }
}

/// RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const ORANGE: Color = Color([255, 165, 0]);

    /// Channels normalized to 0.0..=1.0
    pub fn to_f32(self) -> [f32; 3] {
        let [r, g, b] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// How a mesh is shaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshStyle {
    pub color: Color,
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,
    /// Draw triangle edges on top of the surface
    pub show_edges: bool,
    #[serde(default = "default_edge_color")]
    pub edge_color: Color,
}

fn default_edge_color() -> Color {
    Color::BLACK
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
            show_edges: false,
            edge_color: Color::BLACK,
        }
    }
}

/// A primitive placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMesh {
    pub id: ObjectId,
    pub name: String,
    pub primitive: Primitive,
    pub style: MeshStyle,
}

/// Canvas corner where a text annotation is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Text annotation drawn on top of the 3D view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub text: String,
    pub position: TextPosition,
    pub color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_font_size() -> f32 {
    14.0
}

/// Everything currently shown on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub meshes: Vec<SceneMesh>,
    #[serde(default)]
    pub texts: Vec<TextOverlay>,
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub axes_visible: bool,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            meshes: Vec::new(),
            texts: Vec::new(),
            background: Color::WHITE,
            axes_visible: false,
        }
    }
}

impl SceneDescription {
    /// Text anchored at the given corner, if any
    pub fn text_at(&self, position: TextPosition) -> Option<&TextOverlay> {
        self.texts.iter().find(|t| t.position == position)
    }
}
