use std::collections::HashSet;

use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, index: usize) -> Vec3 {
        let base = index * 9;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Debug, Clone, PartialEq)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 14
    }

    /// Endpoints of the i-th segment
    pub fn segment(&self, index: usize) -> (Vec3, Vec3) {
        let a = index * 14;
        let b = a + 7;
        (
            Vec3::new(self.vertices[a], self.vertices[a + 1], self.vertices[a + 2]),
            Vec3::new(self.vertices[b], self.vertices[b + 1], self.vertices[b + 2]),
        )
    }
}

// ── Primitive generation ─────────────────────────────────────

/// UV sphere centered at `center`
pub fn sphere(radius: f32, center: Vec3, rings: u32, sectors: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::with_capacity(((rings + 1) * (sectors + 1) * 9) as usize);
    let mut indices = Vec::with_capacity((rings * sectors * 6) as usize);

    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        let sp = phi.sin();
        let cp = phi.cos();

        for s in 0..=sectors {
            let theta = std::f32::consts::TAU * s as f32 / sectors as f32;
            let st = theta.sin();
            let ct = theta.cos();

            let n = Vec3::new(sp * ct, cp, sp * st);
            let p = center + n * radius;
            push_vert(&mut vertices, p.x, p.y, p.z, n, color);
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            // Pole rows collapse to a point; skip the degenerate half of each quad
            if r != 0 {
                indices.extend_from_slice(&[i0, i2, i1]);
            }
            if r != rings - 1 {
                indices.extend_from_slice(&[i1, i2, i3]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Unique triangle edges of a mesh as line segments.
///
/// Edges are deduplicated by position, so seam and pole vertices that share
/// a location with different indices yield a single segment.
pub fn edges(data: &MeshData, color: [f32; 4]) -> LineMeshData {
    let mut seen: HashSet<(PosKey, PosKey)> = HashSet::new();
    let mut vertices = Vec::new();

    for tri in data.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let pa = data.position(a as usize);
            let pb = data.position(b as usize);
            let (ka, kb) = (pos_key(pa), pos_key(pb));
            if ka == kb {
                continue;
            }
            let key = if ka < kb { (ka, kb) } else { (kb, ka) };
            if !seen.insert(key) {
                continue;
            }
            push_line_vert(&mut vertices, pa.x, pa.y, pa.z, color);
            push_line_vert(&mut vertices, pb.x, pb.y, pb.z, color);
        }
    }

    LineMeshData { vertices }
}

type PosKey = (i64, i64, i64);

fn pos_key(v: Vec3) -> PosKey {
    const SCALE: f32 = 1e5;
    (
        (v.x * SCALE).round() as i64,
        (v.y * SCALE).round() as i64,
        (v.z * SCALE).round() as i64,
    )
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[px, py, pz, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}
