//! # Face Extrusion
//!
//! Turns the selected patch into a raised cap joined to the untouched
//! surface by new side walls.
//!
//! ## Algorithm
//!
//! 1. Sum the unit normals of the patch vertices; the normalized sum is the
//!    extrusion direction
//! 2. Find the patch boundary edges, each directed by its owning face
//! 3. Append a copy of every patch vertex, displaced by `direction * depth`
//! 4. Rewire the selected faces onto the copies (the cap)
//! 5. For each boundary edge `u → v` emit `(u, v, v')` and `(u, v', u')`
//! 6. Recompute vertex normals of the new buffers
//!
//! Step 5 keeps the walls wound the same way as the cap and the base, so
//! the result needs no normal flipping. Originals of the patch vertices stay
//! where they were and form the root of the walls.
//!
//! The input buffers are only read. A fresh buffer set is assembled and
//! handed back whole, so a failing call never exposes a half-built mesh.

mod boundary;

#[cfg(test)]
mod tests;

pub use boundary::{boundary_edges, BoundaryEdge};

use crate::error::{EditorError, EditorResult};
use crate::mesh::MeshBuffers;
use crate::selection::SelectionSet;
use config::constants::EditorConfig;
use glam::DVec3;
use std::collections::HashMap;
use std::ops::Range;

/// Result of a successful extrusion.
#[derive(Debug, Clone)]
pub struct ExtrudeOutcome {
    /// The rebuilt mesh
    pub mesh: MeshBuffers,
    /// Unit direction the cap was moved along
    pub direction: DVec3,
    /// Patch boundary, in terms of the original (root) vertices
    pub boundary: Vec<BoundaryEdge>,
    /// Vertex indices of the duplicated cap vertices
    pub cap_vertices: Range<usize>,
    /// Face indices of the generated side-wall triangles
    pub side_walls: Range<usize>,
}

/// Extrudes the selected faces of `mesh` by `depth`.
///
/// For a selection touching `k` vertices with `b` boundary edges the result
/// has `V + k` vertices and `F + 2b` faces. `depth` may be zero (the cap
/// coincides with the base and the walls are degenerate) or negative.
///
/// # Errors
///
/// - `EmptySelection` if nothing is selected
/// - `NonFiniteAmount` if `depth` is NaN or infinite
/// - `UnindexedMesh` if the mesh has no triangle index list
/// - `FaceOutOfRange` if the selection refers to a missing face
/// - `DegenerateRegionNormal` if the patch normals cancel out
/// - `AmbiguousBoundaryWinding` if a boundary edge has no single owner
/// - `TooManyVertices` if the copies would exceed `config.max_vertices`
///
/// # Example
///
/// ```rust
/// use config::constants::EditorConfig;
/// use mesh_editor::{ops::extrude, MeshBuffers, SelectionSet};
/// use glam::DVec3;
///
/// let mesh = MeshBuffers::from_positions(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// let selection: SelectionSet = [0].into_iter().collect();
/// let outcome = extrude(&mesh, &selection, 2.0, &EditorConfig::default()).unwrap();
/// assert_eq!(outcome.mesh.vertex_count(), 6);
/// assert_eq!(outcome.mesh.face_count(), 7);
/// assert_eq!(outcome.mesh.position(3), DVec3::new(0.0, 0.0, 2.0));
/// ```
pub fn extrude(
    mesh: &MeshBuffers,
    selection: &SelectionSet,
    depth: f64,
    config: &EditorConfig,
) -> EditorResult<ExtrudeOutcome> {
    if selection.is_empty() {
        return Err(EditorError::EmptySelection);
    }
    EditorError::check_finite("extrude", depth)?;
    let triangles = mesh.require_indexed("extrude")?;
    selection.check_bounds(triangles.len())?;

    let patch_vertices = selection.vertices(triangles);

    let normal_sum: DVec3 = patch_vertices.iter().map(|&v| mesh.normal(v)).sum();
    let magnitude = normal_sum.length();
    if magnitude < config.normal_epsilon {
        return Err(EditorError::DegenerateRegionNormal { magnitude });
    }
    let direction = normal_sum / magnitude;

    let boundary = boundary_edges(triangles, selection)?;

    let old_vertex_count = mesh.vertex_count();
    let new_vertex_count = old_vertex_count + patch_vertices.len();
    if new_vertex_count > config.max_vertices {
        return Err(EditorError::TooManyVertices {
            count: new_vertex_count,
            max: config.max_vertices,
        });
    }

    let mut positions = Vec::with_capacity(new_vertex_count);
    positions.extend_from_slice(mesh.positions());
    let mut normals = Vec::with_capacity(new_vertex_count);
    normals.extend_from_slice(mesh.normals());

    let offset = direction * depth;
    let mut cap: HashMap<u32, u32> = HashMap::with_capacity(patch_vertices.len());
    for &v in &patch_vertices {
        cap.insert(v, positions.len() as u32);
        positions.push(mesh.position(v) + offset);
        normals.push(mesh.normal(v));
    }

    let mut faces = Vec::with_capacity(triangles.len() + 2 * boundary.len());
    faces.extend_from_slice(triangles);
    for face in selection.iter() {
        let tri = &mut faces[face as usize];
        *tri = tri.map(|v| cap[&v]);
    }

    let wall_start = faces.len();
    for edge in &boundary {
        let (u, v) = (edge.from, edge.to);
        let (u_cap, v_cap) = (cap[&u], cap[&v]);
        faces.push([u, v, v_cap]);
        faces.push([u, v_cap, u_cap]);
    }

    let mut extruded = MeshBuffers::from_parts(positions, normals, faces);
    extruded.compute_normals();

    tracing::debug!(
        faces = selection.len(),
        duplicated = patch_vertices.len(),
        boundary_edges = boundary.len(),
        depth,
        "extruded selection"
    );

    Ok(ExtrudeOutcome {
        side_walls: wall_start..extruded.face_count(),
        cap_vertices: old_vertex_count..new_vertex_count,
        mesh: extruded,
        direction,
        boundary,
    })
}
