//! Boundary edges of a face subset, oriented by the winding of the one
//! selected face that owns each of them.

use crate::error::{EditorError, EditorResult};
use crate::selection::SelectionSet;
use crate::topology::edge::{directed_edges, EdgeKey};
use std::collections::HashMap;

/// An edge used by exactly one selected face, directed as that face
/// traverses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEdge {
    /// Start vertex in the owning face's winding
    pub from: u32,
    /// End vertex in the owning face's winding
    pub to: u32,
    /// Selected face that owns the edge
    pub face: u32,
}

/// Finds the boundary edges of `selection`, directed by face winding.
///
/// Only selected faces are counted: an edge shared by two selected faces is
/// interior, an edge seen once is boundary, whether it lies on the mesh
/// border or on the selection cut. Edges come back in selection order, face
/// by face, so disjoint loops (a patch with a hole, two islands) are all
/// covered without following any loop.
///
/// # Errors
///
/// `AmbiguousBoundaryWinding` when a selected face uses the same undirected
/// edge twice (a triangle with a repeated vertex) or when three or more
/// selected faces meet on one edge.
pub fn boundary_edges(
    triangles: &[[u32; 3]],
    selection: &SelectionSet,
) -> EditorResult<Vec<BoundaryEdge>> {
    let mut uses: HashMap<EdgeKey, u32> = HashMap::with_capacity(selection.len() * 3);

    for face in selection.iter() {
        let edges = directed_edges(triangles[face as usize]);
        for (i, &(u, v)) in edges.iter().enumerate() {
            let key = EdgeKey::new(u, v);
            if edges[..i].iter().any(|&(a, b)| EdgeKey::new(a, b) == key) {
                return Err(EditorError::ambiguous_winding(
                    u,
                    v,
                    format!("face {face} uses the edge twice"),
                ));
            }
            *uses.entry(key).or_insert(0) += 1;
        }
    }

    let mut boundary = Vec::new();
    for face in selection.iter() {
        for (u, v) in directed_edges(triangles[face as usize]) {
            match uses.get(&EdgeKey::new(u, v)).copied().unwrap_or(0) {
                1 => boundary.push(BoundaryEdge { from: u, to: v, face }),
                2 => {}
                count => {
                    return Err(EditorError::ambiguous_winding(
                        u,
                        v,
                        format!("edge used by {count} selected faces"),
                    ));
                }
            }
        }
    }

    Ok(boundary)
}
