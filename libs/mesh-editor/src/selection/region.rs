//! Breadth-first region growth.

use super::SelectionSet;
use crate::error::{EditorError, EditorResult};
use crate::topology::AdjacencyGraph;
use std::collections::VecDeque;

/// Flood-fills the connected component containing `seed`.
///
/// Every face reachable from `seed` through shared edges is returned,
/// regardless of the angle between neighbouring faces. Terminates after
/// visiting each face at most once.
///
/// # Errors
///
/// `FaceOutOfRange` if `seed` is not a face of the graph.
///
/// # Example
///
/// ```rust
/// use mesh_editor::{grow_region, AdjacencyGraph, MeshBuffers};
/// use glam::DVec3;
///
/// let mesh = MeshBuffers::from_positions(
///     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
///     vec![[0, 1, 2], [0, 2, 3]],
/// ).unwrap();
/// let graph = AdjacencyGraph::build(&mesh).unwrap();
/// let region = grow_region(0, &graph).unwrap();
/// assert_eq!(region.len(), 2);
/// ```
pub fn grow_region(seed: u32, graph: &AdjacencyGraph) -> EditorResult<SelectionSet> {
    let face_count = graph.face_count();
    if seed as usize >= face_count {
        return Err(EditorError::FaceOutOfRange {
            face: seed,
            face_count,
        });
    }

    let mut visited = vec![false; face_count];
    let mut queue = VecDeque::from([seed]);
    visited[seed as usize] = true;

    let mut region = SelectionSet::new();
    while let Some(face) = queue.pop_front() {
        region.insert(face);
        for &neighbor in graph.neighbors(face) {
            if !visited[neighbor as usize] {
                visited[neighbor as usize] = true;
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(seed, faces = region.len(), "grew region");
    Ok(region)
}
