//! # Config Crate
//!
//! Centralized configuration constants for the mesh topology editor.
//! All tolerances and default tool amounts are defined here so that the
//! editor crate never scatters literals through its operators.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, EditorConfig, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(approx_zero(value));
//! assert!(value.abs() < EPSILON);
//!
//! // Tool defaults travel together in one validated snapshot
//! let cfg = EditorConfig::default();
//! assert!(cfg.default_extrude_depth > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Overrides**: Custom values go through `EditorConfig::new`
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
