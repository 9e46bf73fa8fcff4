//! Scene mesh cache management

use std::collections::HashMap;
use std::sync::Arc;

use shared::{ObjectId, SceneDescription};

use super::{build_scene_meshes, BuiltMesh};

/// Cached tessellated meshes, rebuilt when the scene version changes
pub struct MeshCache {
    meshes: Arc<HashMap<ObjectId, BuiltMesh>>,
    version: u64,
    rebuild_count: u64,
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            meshes: Arc::new(HashMap::new()),
            version: u64::MAX, // force first rebuild
            rebuild_count: 0,
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, scene_version: u64) -> bool {
        self.version == scene_version
    }

    /// Rebuild if the scene changed since the last build. Returns true when rebuilt.
    pub fn sync(&mut self, scene: &SceneDescription, version: u64) -> bool {
        if self.is_valid(version) {
            return false;
        }
        self.meshes = Arc::new(build_scene_meshes(scene));
        self.version = version;
        self.rebuild_count += 1;
        tracing::debug!(
            meshes = self.meshes.len(),
            version,
            "Rebuilt scene mesh cache"
        );
        true
    }

    pub fn meshes(&self) -> &HashMap<ObjectId, BuiltMesh> {
        &self.meshes
    }

    /// Shared handle to the cached meshes (for passing into PaintCallback)
    pub fn shared_meshes(&self) -> Arc<HashMap<ObjectId, BuiltMesh>> {
        Arc::clone(&self.meshes)
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}
