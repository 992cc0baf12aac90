//! # Editor Errors
//!
//! Error types for selection and editing operations.
//!
//! ## Error Policy
//!
//! - Every failure is returned to the caller, never raised as a panic
//! - A failed call leaves the mesh and the selection in their last good state
//! - `EmptySelection` is a report, not a failure of the editor

use thiserror::Error;

/// Errors that can occur while selecting or editing a mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// Thicken or extrude was invoked with no faces selected.
    #[error("No faces selected")]
    EmptySelection,

    /// The mesh has no triangle index list.
    #[error("Geometry must be indexed for {operation}")]
    UnindexedMesh {
        /// Operation that needed the index list
        operation: &'static str,
    },

    /// The summed normal of the selected region has (almost) no length.
    #[error("Selected region has no usable normal (magnitude {magnitude:e})")]
    DegenerateRegionNormal {
        /// Length of the summed vertex normals
        magnitude: f64,
    },

    /// A boundary edge could not be tied to exactly one selected face.
    #[error("Ambiguous winding on boundary edge ({u}, {v}): {message}")]
    AmbiguousBoundaryWinding {
        /// Smaller vertex index of the edge
        u: u32,
        /// Larger vertex index of the edge
        v: u32,
        /// What made the edge ambiguous
        message: String,
    },

    /// A face index does not exist in the current mesh.
    #[error("Face {face} out of range (mesh has {face_count} faces)")]
    FaceOutOfRange { face: u32, face_count: usize },

    /// A thicken amount or extrude depth was NaN or infinite.
    #[error("{operation} amount must be finite, got {amount}")]
    NonFiniteAmount {
        /// Operation that received the amount
        operation: &'static str,
        /// The rejected value
        amount: f64,
    },

    /// Mesh buffers are internally inconsistent.
    #[error("Invalid mesh buffers: {message}")]
    InvalidBuffers { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl EditorError {
    /// Creates an invalid buffers error.
    pub fn invalid_buffers(message: impl Into<String>) -> Self {
        Self::InvalidBuffers {
            message: message.into(),
        }
    }

    /// Creates an ambiguous winding error for the edge `{u, v}`.
    pub fn ambiguous_winding(u: u32, v: u32, message: impl Into<String>) -> Self {
        Self::AmbiguousBoundaryWinding {
            u: u.min(v),
            v: u.max(v),
            message: message.into(),
        }
    }

    /// Rejects NaN and infinite offsets before they reach the buffers.
    pub(crate) fn check_finite(operation: &'static str, amount: f64) -> EditorResult<()> {
        if amount.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFiniteAmount { operation, amount })
        }
    }

    /// Returns false for reports that do not indicate a failed edit.
    ///
    /// An empty selection is a no-op the user is told about; everything else
    /// aborted the call it came from.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::EmptySelection)
    }
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
