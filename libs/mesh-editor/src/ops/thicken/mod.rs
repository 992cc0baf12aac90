//! # Thicken
//!
//! Uniform offset of the selected surface along its vertex normals.
//!
//! No vertices or faces are created. A vertex shared between a selected
//! and an unselected face moves too, so neighbouring unselected triangles
//! stretch to follow and no seam opens up.


use crate::error::{EditorError, EditorResult};
use crate::mesh::MeshBuffers;
use crate::selection::SelectionSet;
use glam::DVec3;

/// Moves every vertex of the selected faces by `normal * amount`.
///
/// `amount` may be negative for an inward offset. Vertex normals of the
/// whole mesh are recomputed afterwards. Returns the number of vertices
/// moved.
///
/// # Errors
///
/// - `EmptySelection` if nothing is selected (the mesh is untouched)
/// - `NonFiniteAmount` if `amount` is NaN or infinite
/// - `UnindexedMesh` if the mesh has no triangle index list
/// - `FaceOutOfRange` if the selection refers to a missing face
///
/// All checks happen before the first position is written.
///
/// # Example
///
/// ```rust
/// use mesh_editor::{ops::thicken, MeshBuffers, SelectionSet};
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffers::from_positions(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// let selection: SelectionSet = [0].into_iter().collect();
/// thicken(&mut mesh, &selection, 2.0).unwrap();
/// assert_eq!(mesh.position(1), DVec3::new(1.0, 0.0, 2.0));
/// ```
pub fn thicken(
    mesh: &mut MeshBuffers,
    selection: &SelectionSet,
    amount: f64,
) -> EditorResult<usize> {
    if selection.is_empty() {
        return Err(EditorError::EmptySelection);
    }
    EditorError::check_finite("thicken", amount)?;
    let triangles = mesh.require_indexed("thicken")?;
    selection.check_bounds(triangles.len())?;

    let offsets: Vec<(usize, DVec3)> = selection
        .vertices(triangles)
        .into_iter()
        .map(|v| (v as usize, mesh.normal(v) * amount))
        .collect();

    let positions = mesh.positions_mut();
    for &(vertex, offset) in &offsets {
        positions[vertex] += offset;
    }
    mesh.compute_normals();

    tracing::debug!(
        faces = selection.len(),
        vertices = offsets.len(),
        amount,
        "thickened selection"
    );
    Ok(offsets.len())
}
