//! # Face Selection
//!
//! The set of faces the user has picked, plus region growth over the face
//! adjacency graph.
//!
//! Region growth is an unconstrained flood fill: it follows every shared
//! edge, including sharp creases, until the connected component of the seed
//! is exhausted.

mod region;


pub use region::grow_region;

use crate::error::{EditorError, EditorResult};
use std::collections::BTreeSet;

/// Unique face indices, iterated in ascending order.
///
/// # Example
///
/// ```rust
/// use mesh_editor::SelectionSet;
///
/// let mut selection = SelectionSet::new();
/// assert!(selection.toggle(4));
/// assert!(selection.contains(4));
/// assert!(!selection.toggle(4));
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    faces: BTreeSet<u32>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of selected faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns true if the face is selected.
    #[inline]
    pub fn contains(&self, face: u32) -> bool {
        self.faces.contains(&face)
    }

    /// Adds a face; returns false if it was already selected.
    pub fn insert(&mut self, face: u32) -> bool {
        self.faces.insert(face)
    }

    /// Removes a face; returns false if it was not selected.
    pub fn remove(&mut self, face: u32) -> bool {
        self.faces.remove(&face)
    }

    /// Flips membership of a face and returns whether it is now selected.
    pub fn toggle(&mut self, face: u32) -> bool {
        if self.faces.remove(&face) {
            false
        } else {
            self.faces.insert(face);
            true
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// Adds every face of `other`.
    pub fn union_with(&mut self, other: &SelectionSet) {
        self.faces.extend(other.faces.iter().copied());
    }

    /// Iterates over the selected faces in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.faces.iter().copied()
    }

    /// Fails with `FaceOutOfRange` for the first face `>= face_count`.
    pub fn check_bounds(&self, face_count: usize) -> EditorResult<()> {
        match self.faces.iter().next_back() {
            Some(&face) if face as usize >= face_count => {
                Err(EditorError::FaceOutOfRange { face, face_count })
            }
            _ => Ok(()),
        }
    }

    /// Collects the unique vertices referenced by the selected faces.
    ///
    /// Faces must be in range for `triangles`; see [`Self::check_bounds`].
    pub fn vertices(&self, triangles: &[[u32; 3]]) -> BTreeSet<u32> {
        self.faces
            .iter()
            .flat_map(|&face| triangles[face as usize])
            .collect()
    }
}

impl FromIterator<u32> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for SelectionSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.faces.extend(iter);
    }
}
