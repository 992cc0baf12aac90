//! # Edge Keys
//!
//! An undirected edge packed into a single `u64`: the smaller vertex index
//! in the high 32 bits, the larger in the low 32 bits.

/// Undirected edge between two vertices, usable as a hash key.
///
/// # Example
///
/// ```rust
/// use mesh_editor::topology::EdgeKey;
///
/// assert_eq!(EdgeKey::new(7, 3), EdgeKey::new(3, 7));
/// assert_eq!(EdgeKey::new(7, 3).vertices(), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u64);

impl EdgeKey {
    /// Creates the key for the edge `{u, v}`.
    #[inline]
    pub fn new(u: u32, v: u32) -> Self {
        let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
        Self(((lo as u64) << 32) | hi as u64)
    }

    /// Returns `(min, max)` vertex indices.
    #[inline]
    pub fn vertices(self) -> (u32, u32) {
        ((self.0 >> 32) as u32, self.0 as u32)
    }

    /// Returns the packed representation.
    #[inline]
    pub fn packed(self) -> u64 {
        self.0
    }
}

/// Returns the three directed edges of a triangle in winding order.
#[inline]
pub fn directed_edges(tri: [u32; 3]) -> [(u32, u32); 3] {
    [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
}

/// Returns the three undirected edge keys of a triangle.
#[inline]
pub fn face_edges(tri: [u32; 3]) -> [EdgeKey; 3] {
    directed_edges(tri).map(|(u, v)| EdgeKey::new(u, v))
}
