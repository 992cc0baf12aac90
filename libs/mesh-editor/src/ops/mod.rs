//! # Mesh Operations
//!
//! Edits applied to the selected faces of an indexed mesh:
//! - **thicken**: offset selected vertices along their normals, in place
//! - **extrude**: lift a copy of the selected patch and wall in the gap

pub mod extrude;
pub mod thicken;

pub use extrude::{extrude, ExtrudeOutcome};
pub use thicken::thicken;
