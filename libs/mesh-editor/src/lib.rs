//! # Mesh Editor
//!
//! Face selection and local topology edits on indexed triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! MeshBuffers → AdjacencyGraph → grow_region → SelectionSet
//!                                                  ↓
//!                                  ops::thicken | ops::extrude
//!                                                  ↓
//!                                       MeshBuffers (edited)
//! ```
//!
//! [`MeshEditor`] ties these together for a host application: it owns the
//! buffers and the selection, accepts picked faces, and reports to the user
//! through a [`Notifier`]. Rendering, picking and file I/O stay with the host.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_editor::{MeshBuffers, MeshEditor};
//! use glam::DVec3;
//!
//! // A unit square split along its diagonal.
//! let mesh = MeshBuffers::from_positions(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
//!     vec![[0, 1, 2], [0, 2, 3]],
//! )?;
//! let mut editor = MeshEditor::new(mesh);
//! editor.grow_region(0)?;
//! let mesh = editor.extrude(2.0)?;
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 2 + 2 * 4);
//! # Ok::<(), mesh_editor::EditorError>(())
//! ```

pub mod editor;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod selection;
pub mod topology;

#[cfg(test)]
mod test_support;

pub use editor::{FacePicker, MeshEditor, Notifier, TracingNotifier};
pub use error::{EditorError, EditorResult};
pub use mesh::MeshBuffers;
pub use selection::{grow_region, SelectionSet};
pub use topology::{AdjacencyGraph, EdgeKey};
