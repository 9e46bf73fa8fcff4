//! Tessellation of scene primitives into GPU-ready meshes

mod cache;

pub use cache::MeshCache;

use std::collections::HashMap;

use glam::Vec3;
use shared::{ObjectId, Primitive, SceneDescription, SceneMesh};

use crate::viewport::bounds::Aabb;
use crate::viewport::mesh::{self, LineMeshData, MeshData};

pub const SPHERE_RINGS: u32 = 30;
pub const SPHERE_SECTORS: u32 = 30;

/// Tessellated scene mesh with its shading parameters
#[derive(Debug, Clone)]
pub struct BuiltMesh {
    pub surface: MeshData,
    /// Edge lines when the style asks for them
    pub edges: Option<LineMeshData>,
    pub opacity: f32,
    pub bounds: Option<Aabb>,
}

/// Tessellate a single primitive with a flat vertex color
pub fn tessellate(primitive: &Primitive, color: [f32; 3]) -> MeshData {
    match primitive {
        Primitive::Sphere { radius, center } => mesh::sphere(
            *radius as f32,
            Vec3::new(center[0] as f32, center[1] as f32, center[2] as f32),
            SPHERE_RINGS,
            SPHERE_SECTORS,
            color,
        ),
    }
}

/// Build one scene mesh
pub fn build_mesh(scene_mesh: &SceneMesh) -> BuiltMesh {
    let style = &scene_mesh.style;
    let opacity = style.opacity.clamp(0.0, 1.0);
    let surface = tessellate(&scene_mesh.primitive, style.color.to_f32());
    // Edges fade with the surface
    let edges = style.show_edges.then(|| {
        let [r, g, b] = style.edge_color.to_f32();
        mesh::edges(&surface, [r, g, b, opacity])
    });
    let bounds = Aabb::from_mesh(&surface);
    BuiltMesh {
        surface,
        edges,
        opacity,
        bounds,
    }
}

/// Build all meshes in the scene, keyed by mesh ID
pub fn build_scene_meshes(scene: &SceneDescription) -> HashMap<ObjectId, BuiltMesh> {
    scene
        .meshes
        .iter()
        .map(|m| (m.id.clone(), build_mesh(m)))
        .collect()
}

/// Bounds of every mesh in the scene, or None when the scene is empty
pub fn scene_bounds(scene: &SceneDescription) -> Option<Aabb> {
    scene
        .meshes
        .iter()
        .map(|m| {
            let (min, max) = m.primitive.bounds();
            Aabb::new(
                Vec3::new(min[0] as f32, min[1] as f32, min[2] as f32),
                Vec3::new(max[0] as f32, max[1] as f32, max[2] as f32),
            )
        })
        .reduce(|a, b| a.union(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Color, MeshStyle};

    fn sphere_mesh(id: &str, radius: f64, center: [f64; 3], show_edges: bool) -> SceneMesh {
        SceneMesh {
            id: id.to_string(),
            name: "Sphere".to_string(),
            primitive: Primitive::Sphere { radius, center },
            style: MeshStyle {
                color: Color::ORANGE,
                opacity: 0.8,
                show_edges,
                edge_color: Color::BLACK,
            },
        }
    }

    #[test]
    fn test_build_mesh_with_edges() {
        let built = build_mesh(&sphere_mesh("s", 0.5, [0.0; 3], true));
        assert_eq!(built.surface.vertex_count(), 31 * 31);
        assert!(built.edges.as_ref().is_some_and(|e| e.segment_count() > 0));
        assert_eq!(built.opacity, 0.8);
        // Vertex color is the style color
        let c = &built.surface.vertices[6..9];
        assert_eq!(c, &Color::ORANGE.to_f32());
    }

    #[test]
    fn test_edges_share_surface_opacity() {
        let built = build_mesh(&sphere_mesh("s", 0.5, [0.0; 3], true));
        let edges = built.edges.unwrap();
        for seg in edges.vertices.chunks_exact(7) {
            assert_eq!(&seg[3..7], &[0.0, 0.0, 0.0, 0.8]);
        }
    }

    #[test]
    fn test_build_mesh_without_edges() {
        let built = build_mesh(&sphere_mesh("s", 0.5, [0.0; 3], false));
        assert!(built.edges.is_none());
    }

    #[test]
    fn test_scene_bounds() {
        let mut scene = SceneDescription::default();
        assert!(scene_bounds(&scene).is_none());

        scene.meshes.push(sphere_mesh("a", 1.0, [0.0; 3], false));
        scene.meshes.push(sphere_mesh("b", 1.0, [4.0, 0.0, 0.0], false));
        let b = scene_bounds(&scene).unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(b.max, Vec3::new(5.0, 1.0, 1.0));
    }

    #[test]
    fn test_build_scene_meshes_keys() {
        let mut scene = SceneDescription::default();
        scene.meshes.push(sphere_mesh("a", 1.0, [0.0; 3], false));
        scene.meshes.push(sphere_mesh("b", 0.5, [1.0; 3], true));
        let built = build_scene_meshes(&scene);
        assert_eq!(built.len(), 2);
        assert!(built.contains_key("a"));
        assert!(built.contains_key("b"));
    }
}
