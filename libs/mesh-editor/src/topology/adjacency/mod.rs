//! # Face Adjacency
//!
//! Face → neighbouring faces over shared undirected edges.
//!
//! ## Algorithm
//!
//! 1. Emit the three edge keys of every face into `edge → [faces]`
//! 2. For every face, collect the other faces listed on its edges
//!
//! Non-manifold edges (three or more faces) make all of their faces mutual
//! neighbours. Cost is O(F) with one hash lookup per edge.


use super::edge::{face_edges, EdgeKey};
use crate::error::EditorResult;
use crate::mesh::MeshBuffers;
use std::collections::HashMap;

/// Neighbour lists for every face of a mesh.
///
/// Each list is sorted ascending, free of duplicates and never contains the
/// face itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<u32>>,
}

impl AdjacencyGraph {
    /// Builds the adjacency of an indexed mesh.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnindexedMesh`](crate::EditorError::UnindexedMesh) when
    /// the mesh has no triangle index list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_editor::{AdjacencyGraph, MeshBuffers};
    /// use glam::DVec3;
    ///
    /// // Two triangles sharing the diagonal of a unit square.
    /// let mesh = MeshBuffers::from_positions(
    ///     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
    ///     vec![[0, 1, 2], [0, 2, 3]],
    /// ).unwrap();
    /// let graph = AdjacencyGraph::build(&mesh).unwrap();
    /// assert_eq!(graph.neighbors(0), &[1]);
    /// assert_eq!(graph.neighbors(1), &[0]);
    /// ```
    pub fn build(mesh: &MeshBuffers) -> EditorResult<Self> {
        let triangles = mesh.require_indexed("face adjacency")?;

        let mut edge_to_faces: HashMap<EdgeKey, Vec<u32>> =
            HashMap::with_capacity(triangles.len() * 3 / 2);
        for (face, tri) in triangles.iter().enumerate() {
            for edge in face_edges(*tri) {
                edge_to_faces.entry(edge).or_default().push(face as u32);
            }
        }

        let neighbors = triangles
            .iter()
            .enumerate()
            .map(|(face, tri)| {
                let face = face as u32;
                let mut list: Vec<u32> = face_edges(*tri)
                    .iter()
                    .filter_map(|edge| edge_to_faces.get(edge))
                    .flatten()
                    .copied()
                    .filter(|&other| other != face)
                    .collect();
                list.sort_unstable();
                list.dedup();
                list
            })
            .collect();

        tracing::debug!(
            faces = triangles.len(),
            edges = edge_to_faces.len(),
            "built face adjacency"
        );

        Ok(Self { neighbors })
    }

    /// Returns the number of faces in the graph.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the neighbours of a face; empty for an unknown face.
    #[inline]
    pub fn neighbors(&self, face: u32) -> &[u32] {
        self.neighbors
            .get(face as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the two faces share an edge.
    pub fn are_adjacent(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Iterates over `(face, neighbours)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(face, list)| (face as u32, list.as_slice()))
    }
}
