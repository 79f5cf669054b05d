//! Error kinds shared by the geometry containers, the hull and the simplifier.
//!
//! All failures are local and synchronous: they are raised where they are
//! detected and returned with `?`. Nothing is retried, the algorithms are
//! deterministic.

use thiserror::Error;

/// Errors raised by `polyhull`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// Positional access outside `[0, size)` on a coordinate sequence.
    #[error("coordinate position {pos} out of range for sequence of size {size}")]
    IndexOutOfRange { pos: usize, size: usize },

    /// A ring with fewer than 4 coordinates or with first != last.
    #[error("invalid ring: {0}")]
    InvalidRing(String),

    /// A line string with fewer than 2 coordinates.
    #[error("invalid line string: {0}")]
    InvalidLineString(String),

    /// A ring would collapse below `min` usable vertices.
    #[error("ring cannot be reduced below {min} vertices")]
    DegenerateGeometry { min: usize },

    /// A fraction, ratio or tolerance outside its documented range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HullError>;
