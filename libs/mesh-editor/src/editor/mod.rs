//! # Mesh Editor
//!
//! Stateful front end the host application drives: owns the mesh buffers
//! and the face selection, forwards picks, and runs the edit operators.
//!
//! ## Collaborators
//!
//! ```text
//! host picking (FacePicker) → MeshEditor → ops::{thicken, extrude}
//!                                  ↓
//!                         Notifier (user messages)
//! ```
//!
//! Every operation runs to completion on the calling thread. A failed call
//! leaves the mesh and the selection exactly as they were; the failure is
//! returned to the caller and announced through the notifier.

mod notify;


pub use notify::{FacePicker, Notifier, TracingNotifier};

use crate::error::{EditorError, EditorResult};
use crate::mesh::MeshBuffers;
use crate::ops;
use crate::selection::{grow_region, SelectionSet};
use crate::topology::AdjacencyGraph;
use config::constants::EditorConfig;
use glam::DVec3;

/// Face selection and topology editing over one owned mesh.
///
/// # Example
///
/// ```rust
/// use mesh_editor::{MeshBuffers, MeshEditor};
/// use glam::DVec3;
///
/// let mesh = MeshBuffers::from_positions(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// ).unwrap();
/// let mut editor = MeshEditor::new(mesh);
/// editor.enable_selection_mode(true);
/// editor.on_face_picked(0).unwrap();
/// let extruded = editor.extrude(1.0).unwrap();
/// assert_eq!(extruded.face_count(), 7);
/// assert!(editor.current_selection().is_empty());
/// ```
#[derive(Debug)]
pub struct MeshEditor<N: Notifier = TracingNotifier> {
    mesh: MeshBuffers,
    selection: SelectionSet,
    selection_mode: bool,
    generation: u64,
    config: EditorConfig,
    notifier: N,
}

impl MeshEditor<TracingNotifier> {
    /// Creates an editor that reports user messages through `tracing`.
    pub fn new(mesh: MeshBuffers) -> Self {
        Self::with_notifier(mesh, TracingNotifier)
    }
}

impl<N: Notifier> MeshEditor<N> {
    /// Creates an editor that reports user messages to `notifier`.
    pub fn with_notifier(mesh: MeshBuffers, notifier: N) -> Self {
        Self {
            mesh,
            selection: SelectionSet::new(),
            selection_mode: false,
            generation: 0,
            config: EditorConfig::default(),
            notifier,
        }
    }

    /// Replaces the editor configuration.
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Returns the current mesh buffers.
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Consumes the editor and hands the mesh back to the host.
    pub fn into_mesh(self) -> MeshBuffers {
        self.mesh
    }

    /// Counter bumped every time the buffers are replaced wholesale.
    ///
    /// Face indices the host holds from an older generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swaps in a newly loaded mesh and drops the selection.
    pub fn load_mesh(&mut self, mesh: MeshBuffers) {
        self.mesh = mesh;
        self.selection.clear();
        self.generation += 1;
        tracing::debug!(
            vertices = self.mesh.vertex_count(),
            faces = self.mesh.face_count(),
            generation = self.generation,
            "mesh loaded"
        );
    }

    /// Returns true while picks toggle faces.
    pub fn is_selection_mode(&self) -> bool {
        self.selection_mode
    }

    /// Turns face picking on or off. Leaving selection mode clears the
    /// selection.
    pub fn enable_selection_mode(&mut self, enabled: bool) {
        self.selection_mode = enabled;
        if enabled {
            self.notifier.notify("Selection Mode: Click faces to select");
        } else {
            self.clear_selection();
        }
    }

    /// Toggles one face in or out of the selection.
    ///
    /// Ignored outside selection mode.
    pub fn on_face_picked(&mut self, face: u32) -> EditorResult<()> {
        if !self.selection_mode {
            tracing::trace!(face, "pick ignored outside selection mode");
            return Ok(());
        }
        let face_count = self.mesh.face_count();
        if face as usize >= face_count {
            return Err(self.report(EditorError::FaceOutOfRange { face, face_count }));
        }

        self.selection.toggle(face);
        self.notifier
            .notify(&format!("{} faces selected", self.selection.len()));
        Ok(())
    }

    /// Resolves a screen point through `picker` and toggles the face hit.
    ///
    /// Returns the face that was toggled, if any.
    pub fn pick_at<P: FacePicker + ?Sized>(
        &mut self,
        picker: &P,
        x: f64,
        y: f64,
    ) -> EditorResult<Option<u32>> {
        if !self.selection_mode {
            return Ok(None);
        }
        match picker.resolve_face_at_screen_point(x, y) {
            Some(face) => {
                self.on_face_picked(face)?;
                Ok(Some(face))
            }
            None => Ok(None),
        }
    }

    /// Adds the whole connected region around `seed` to the selection.
    ///
    /// Returns the size of the selection afterwards.
    pub fn grow_region(&mut self, seed: u32) -> EditorResult<usize> {
        let region = AdjacencyGraph::build(&self.mesh)
            .and_then(|graph| grow_region(seed, &graph))
            .map_err(|err| self.report(err))?;

        self.selection.union_with(&region);
        self.notifier
            .notify(&format!("Region selected: {} faces", self.selection.len()));
        Ok(self.selection.len())
    }

    /// Deselects everything. Safe to call repeatedly.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the current selection.
    pub fn current_selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Corner positions of every selected face, for the host's highlight
    /// overlay.
    pub fn selection_triangles(&self) -> Vec<[DVec3; 3]> {
        self.selection
            .iter()
            .filter_map(|face| self.mesh.face_vertices(face).ok())
            .map(|tri| tri.map(|v| self.mesh.position(v)))
            .collect()
    }

    /// Offsets the selected surface along its normals, in place.
    ///
    /// Clears the selection on success.
    pub fn thicken(&mut self, amount: f64) -> EditorResult<()> {
        match ops::thicken(&mut self.mesh, &self.selection, amount) {
            Ok(moved) => {
                tracing::info!(
                    faces = self.selection.len(),
                    vertices = moved,
                    amount,
                    "thicken applied"
                );
                self.selection.clear();
                self.notifier.notify(&format!("Thickened by {amount} units"));
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Thickens by the configured default amount.
    pub fn thicken_default(&mut self) -> EditorResult<()> {
        self.thicken(self.config.default_thicken_amount)
    }

    /// Extrudes the selected patch and commits the rebuilt mesh.
    ///
    /// On success the selection is cleared, the generation advances, and
    /// the new buffers are returned. On failure nothing changes and the
    /// selection is kept so the user can adjust it and retry.
    pub fn extrude(&mut self, depth: f64) -> EditorResult<&MeshBuffers> {
        match ops::extrude(&self.mesh, &self.selection, depth, &self.config) {
            Ok(outcome) => {
                tracing::info!(
                    faces = self.selection.len(),
                    boundary_edges = outcome.boundary.len(),
                    depth,
                    "extrude applied"
                );
                self.mesh = outcome.mesh;
                self.selection.clear();
                self.generation += 1;
                self.notifier.notify(&format!("Extruded {depth} units"));
                Ok(&self.mesh)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Extrudes by the configured default depth.
    pub fn extrude_default(&mut self) -> EditorResult<&MeshBuffers> {
        self.extrude(self.config.default_extrude_depth)
    }

    /// Announces `err` to the user. Only real failures are logged here;
    /// the message itself goes through the notifier.
    fn report(&self, err: EditorError) -> EditorError {
        if err.is_fatal() {
            tracing::warn!(error = %err, "edit rejected");
        }
        self.notifier.notify(&err.to_string());
        err
    }
}
