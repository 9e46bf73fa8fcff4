//! Scene state management
//!
//! Wraps the serializable scene description with a version counter that
//! renderers use to detect changes.

use shared::{Color, MeshStyle, ObjectId, Primitive, SceneDescription, SceneMesh, TextOverlay, TextPosition};

/// Scene contents plus change tracking
#[derive(Default)]
pub struct SceneState {
    /// Current scene
    pub scene: SceneDescription,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Bump version after an in-place change
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Remove meshes, texts and the axis indicator. Background is kept.
    pub fn clear(&mut self) {
        self.scene.meshes.clear();
        self.scene.texts.clear();
        self.scene.axes_visible = false;
        self.notify_mutated();
    }

    pub fn set_background(&mut self, color: Color) {
        self.scene.background = color;
        self.notify_mutated();
    }

    pub fn set_axes_visible(&mut self, visible: bool) {
        self.scene.axes_visible = visible;
        self.notify_mutated();
    }

    /// Add a mesh and return its ID.
    ///
    /// IDs are derived from the name, so adding under an existing name
    /// replaces that mesh.
    pub fn add_mesh(&mut self, name: &str, primitive: Primitive, style: MeshStyle) -> ObjectId {
        let id = mesh_id(name);
        self.scene.meshes.retain(|m| m.id != id);
        self.scene.meshes.push(SceneMesh {
            id: id.clone(),
            name: name.to_string(),
            primitive,
            style,
        });
        self.notify_mutated();
        id
    }

    /// Place text at a corner, replacing whatever was there
    pub fn set_text(&mut self, overlay: TextOverlay) {
        self.scene.texts.retain(|t| t.position != overlay.position);
        self.scene.texts.push(overlay);
        self.notify_mutated();
    }

    pub fn text_at(&self, position: TextPosition) -> Option<&TextOverlay> {
        self.scene.text_at(position)
    }

    pub fn mesh_count(&self) -> usize {
        self.scene.meshes.len()
    }
}

/// Stable name-based mesh ID
fn mesh_id(name: &str) -> ObjectId {
    uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str, position: TextPosition) -> TextOverlay {
        TextOverlay {
            text: s.to_string(),
            position,
            color: Color::BLACK,
            font_size: 14.0,
        }
    }

    #[test]
    fn test_every_mutation_bumps_version() {
        let mut s = SceneState::default();
        let v0 = s.version();
        s.set_background(Color::BLACK);
        s.set_axes_visible(true);
        s.add_mesh("m", Primitive::Sphere { radius: 1.0, center: [0.0; 3] }, MeshStyle::default());
        s.set_text(text("hi", TextPosition::UpperLeft));
        s.clear();
        assert_eq!(s.version(), v0 + 5);
    }

    #[test]
    fn test_set_text_replaces_same_corner() {
        let mut s = SceneState::default();
        s.set_text(text("first", TextPosition::UpperLeft));
        s.set_text(text("corner", TextPosition::LowerRight));
        s.set_text(text("second", TextPosition::UpperLeft));
        assert_eq!(s.scene.texts.len(), 2);
        assert_eq!(s.text_at(TextPosition::UpperLeft).unwrap().text, "second");
    }

    #[test]
    fn test_clear_keeps_background() {
        let mut s = SceneState::default();
        s.set_background(Color::BLACK);
        s.set_axes_visible(true);
        s.add_mesh("m", Primitive::Sphere { radius: 1.0, center: [0.0; 3] }, MeshStyle::default());
        s.set_text(text("t", TextPosition::UpperLeft));
        s.clear();
        assert_eq!(s.mesh_count(), 0);
        assert!(s.scene.texts.is_empty());
        assert!(!s.scene.axes_visible);
        assert_eq!(s.scene.background, Color::BLACK);
    }

    #[test]
    fn test_same_name_replaces_mesh() {
        let mut s = SceneState::default();
        let a = s.add_mesh("Sphere", Primitive::Sphere { radius: 1.0, center: [0.0; 3] }, MeshStyle::default());
        let b = s.add_mesh("Sphere", Primitive::Sphere { radius: 2.0, center: [0.0; 3] }, MeshStyle::default());
        assert_eq!(a, b);
        assert_eq!(s.mesh_count(), 1);
        assert_eq!(s.scene.meshes[0].primitive, Primitive::Sphere { radius: 2.0, center: [0.0; 3] });
    }

    #[test]
    fn test_mesh_ids_are_unique() {
        let mut s = SceneState::default();
        let p = Primitive::Sphere { radius: 1.0, center: [0.0; 3] };
        let a = s.add_mesh("a", p.clone(), MeshStyle::default());
        let b = s.add_mesh("b", p, MeshStyle::default());
        assert_ne!(a, b);
        assert_eq!(s.mesh_count(), 2);
    }
}
