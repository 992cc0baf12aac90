//! # Mesh Buffers
//!
//! The raw geometry the editor works on: vertex positions, per-vertex
//! normals and an optional triangle index list.

use crate::error::{EditorError, EditorResult};
use config::constants::approx_zero;
use glam::DVec3;

/// Vertex positions, vertex normals and triangle indices of a mesh.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when the host uploads the buffers for rendering.
///
/// A mesh without an index list is a triangle soup: every three consecutive
/// vertices form one face. Such meshes can be stored and exported, but every
/// selection and edit operation rejects them with
/// [`EditorError::UnindexedMesh`].
///
/// # Example
///
/// ```rust
/// use mesh_editor::MeshBuffers;
/// use glam::DVec3;
///
/// let mesh = MeshBuffers::from_positions(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.normal(0), DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions
    positions: Vec<DVec3>,
    /// Unit vertex normals, one per position
    normals: Vec<DVec3>,
    /// Triangle indices in winding order (None for triangle soup)
    indices: Option<Vec<[u32; 3]>>,
}

impl MeshBuffers {
    /// Creates an indexed mesh from precomputed normals.
    ///
    /// Fails with [`EditorError::InvalidBuffers`] when the normal count does
    /// not match the position count or a triangle references a missing vertex.
    pub fn indexed(
        positions: Vec<DVec3>,
        normals: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> EditorResult<Self> {
        check_normals(&positions, &normals)?;
        check_indices(positions.len(), &triangles)?;
        Ok(Self {
            positions,
            normals,
            indices: Some(triangles),
        })
    }

    /// Creates an unindexed triangle soup.
    pub fn unindexed(positions: Vec<DVec3>, normals: Vec<DVec3>) -> EditorResult<Self> {
        check_normals(&positions, &normals)?;
        if positions.len() % 3 != 0 {
            return Err(EditorError::invalid_buffers(format!(
                "unindexed mesh needs a multiple of 3 vertices, got {}",
                positions.len()
            )));
        }
        Ok(Self {
            positions,
            normals,
            indices: None,
        })
    }

    /// Creates an indexed mesh and computes its vertex normals.
    pub fn from_positions(positions: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> EditorResult<Self> {
        check_indices(positions.len(), &triangles)?;
        let mut mesh = Self {
            normals: vec![DVec3::ZERO; positions.len()],
            positions,
            indices: Some(triangles),
        };
        mesh.compute_normals();
        Ok(mesh)
    }

    /// Assembles buffers an operator has already built consistently.
    pub(crate) fn from_parts(
        positions: Vec<DVec3>,
        normals: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        Self {
            positions,
            normals,
            indices: Some(triangles),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        match &self.indices {
            Some(triangles) => triangles.len(),
            None => self.positions.len() / 3,
        }
    }

    /// Returns true if the mesh carries a triangle index list.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Returns a reference to the positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the position of a vertex.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the normal of a vertex.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the triangle index list, if any.
    #[inline]
    pub fn triangles(&self) -> Option<&[[u32; 3]]> {
        self.indices.as_deref()
    }

    /// Returns the triangle index list or an `UnindexedMesh` error naming
    /// the operation that needed it.
    pub fn require_indexed(&self, operation: &'static str) -> EditorResult<&[[u32; 3]]> {
        self.indices
            .as_deref()
            .ok_or(EditorError::UnindexedMesh { operation })
    }

    /// Returns the three vertex indices of a face, for either layout.
    pub fn face_vertices(&self, face: u32) -> EditorResult<[u32; 3]> {
        let face_count = self.face_count();
        if face as usize >= face_count {
            return Err(EditorError::FaceOutOfRange { face, face_count });
        }
        Ok(match &self.indices {
            Some(triangles) => triangles[face as usize],
            None => {
                let base = face * 3;
                [base, base + 1, base + 2]
            }
        })
    }

    /// Returns the unit normal of a face by the right-hand rule, or zero for
    /// a degenerate triangle.
    pub fn face_normal(&self, face: u32) -> EditorResult<DVec3> {
        let [a, b, c] = self.face_vertices(face)?;
        let (p0, p1, p2) = (self.position(a), self.position(b), self.position(c));
        Ok((p1 - p0).cross(p2 - p0).normalize_or_zero())
    }

    /// Mutable access for in-place displacement.
    pub(crate) fn positions_mut(&mut self) -> &mut [DVec3] {
        &mut self.positions
    }

    /// Recomputes area-weighted vertex normals for the whole mesh.
    ///
    /// Vertices referenced by no triangle (or only degenerate ones) end up
    /// with a zero normal. A summed normal shorter than `EPSILON` counts as
    /// degenerate.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for face in 0..self.face_count() as u32 {
            let tri = match &self.indices {
                Some(triangles) => triangles[face as usize],
                None => [face * 3, face * 3 + 1, face * 3 + 2],
            };
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if approx_zero(len) {
                *normal = DVec3::ZERO;
            } else {
                *normal /= len;
            }
        }

        self.normals = normals;
    }

    /// Exports positions as a flattened f32 array for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as a flattened f32 array for GPU upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as a flattened u32 array, if indexed.
    pub fn indices_u32(&self) -> Option<Vec<u32>> {
        self.indices
            .as_ref()
            .map(|triangles| triangles.iter().flatten().copied().collect())
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

fn check_normals(positions: &[DVec3], normals: &[DVec3]) -> EditorResult<()> {
    if positions.len() != normals.len() {
        return Err(EditorError::invalid_buffers(format!(
            "{} positions but {} normals",
            positions.len(),
            normals.len()
        )));
    }
    Ok(())
}

fn check_indices(vertex_count: usize, triangles: &[[u32; 3]]) -> EditorResult<()> {
    if vertex_count > config::constants::MAX_VERTICES {
        return Err(EditorError::TooManyVertices {
            count: vertex_count,
            max: config::constants::MAX_VERTICES,
        });
    }
    for (face, tri) in triangles.iter().enumerate() {
        if let Some(&bad) = tri.iter().find(|&&v| v as usize >= vertex_count) {
            return Err(EditorError::invalid_buffers(format!(
                "triangle {face} references vertex {bad}, mesh has {vertex_count}"
            )));
        }
    }
    Ok(())
}
