//! # Configuration Constants
//!
//! Tolerances, tool defaults and size limits shared by the mesh editor.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tool Defaults**: Amounts used when the host does not supply one
//! - **Limits**: Bounds that keep vertex indices inside 32 bits

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Magnitude below which a summed region normal is treated as zero.
///
/// Extrusion sums the unit normals of every vertex in the selected patch.
/// When the patch curls back on itself (a closed cap of a sphere, both sides
/// of a thin plate) the sum cancels and there is no usable direction.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_NORMAL_EPSILON;
///
/// let summed = [0.0_f64, 1e-12, 0.0];
/// let length = summed.iter().map(|c| c * c).sum::<f64>().sqrt();
/// assert!(length < DEGENERATE_NORMAL_EPSILON);
/// ```
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1e-9;

// =============================================================================
// TOOL DEFAULTS
// =============================================================================

/// Offset applied by the thicken tool when no amount is given.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_THICKEN_AMOUNT;
/// assert_eq!(DEFAULT_THICKEN_AMOUNT, 0.5);
/// ```
pub const DEFAULT_THICKEN_AMOUNT: f64 = 0.5;

/// Depth used by the extrude tool when no depth is given.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_EXTRUDE_DEPTH;
/// assert_eq!(DEFAULT_EXTRUDE_DEPTH, 1.0);
/// ```
pub const DEFAULT_EXTRUDE_DEPTH: f64 = 1.0;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum number of vertices a mesh may hold.
///
/// Vertex indices are `u32` and edge keys pack two of them into a `u64`,
/// so the ceiling is the full 32-bit range.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
/// assert_eq!(MAX_VERTICES, u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a floating-point value is approximately zero.
///
/// Used to tell a real (if tiny) area-weighted normal from a degenerate one.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(0.001));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// EDITOR CONFIG
// =============================================================================

/// Immutable snapshot of the settings a mesh editor instance runs with.
///
/// # Examples
/// ```
/// use config::constants::EditorConfig;
/// let config = EditorConfig::default();
/// assert!(config.normal_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Threshold for treating the summed region normal as zero.
    pub normal_epsilon: f64,
    /// Amount used by `thicken` when the host does not pass one.
    pub default_thicken_amount: f64,
    /// Depth used by `extrude` when the host does not pass one.
    pub default_extrude_depth: f64,
    /// Largest vertex count an edit may produce.
    pub max_vertices: usize,
}

impl EditorConfig {
    /// Builds a configuration, rejecting values the operators cannot use.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{EditorConfig, MAX_VERTICES};
    /// let cfg = EditorConfig::new(1.0e-6, 0.25, 2.0, MAX_VERTICES).expect("valid config");
    /// assert_eq!(cfg.default_extrude_depth, 2.0);
    /// ```
    pub fn new(
        normal_epsilon: f64,
        default_thicken_amount: f64,
        default_extrude_depth: f64,
        max_vertices: usize,
    ) -> Result<Self, ConfigError> {
        if !normal_epsilon.is_finite() || normal_epsilon <= 0.0 {
            return Err(ConfigError::InvalidTolerance(normal_epsilon));
        }
        if !default_thicken_amount.is_finite() {
            return Err(ConfigError::NonFiniteAmount(default_thicken_amount));
        }
        if !default_extrude_depth.is_finite() {
            return Err(ConfigError::NonFiniteAmount(default_extrude_depth));
        }
        if max_vertices == 0 || max_vertices > MAX_VERTICES {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        Ok(Self {
            normal_epsilon,
            default_thicken_amount,
            default_extrude_depth,
            max_vertices,
        })
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            normal_epsilon: DEGENERATE_NORMAL_EPSILON,
            default_thicken_amount: DEFAULT_THICKEN_AMOUNT,
            default_extrude_depth: DEFAULT_EXTRUDE_DEPTH,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the normal tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when a default amount is NaN or infinite.
    NonFiniteAmount(f64),
    /// Raised when the vertex limit is zero or exceeds the 32-bit index range.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "normal_epsilon must be positive and finite: {value}")
            }
            ConfigError::NonFiniteAmount(value) => {
                write!(f, "default amounts must be finite: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be in 1..={MAX_VERTICES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
