use std::fmt;

use crate::graph::BoundaryId;

/// Errors produced by the constructive-area-geometry pipeline.
///
/// These mirror the three failure kinds a [`Graph`](crate::graph::Graph)
/// pipeline run can hit: bad input, an internal consistency check that
/// should never fire in a correct build, and the one genuinely open
/// numerical question in the whole design (the extreme-ray cast in
/// `compute_boundary_graph`).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A segment supplied to [`Graph::add_shape`](crate::graph::Graph::add_shape)
    /// contained a non-finite (`NaN`/infinite) coordinate.
    InvalidGeometry {
        shape_id: u32,
        subpath_index: usize,
    },
    /// An internal invariant that should be unreachable after a correctly
    /// ordered pipeline run did not hold. Carries the phase that detected it
    /// and a short, human-readable detail.
    NumericalFailure {
        phase: &'static str,
        detail: String,
    },
    /// The extreme-ray cast used to resolve a boundary's containing face
    /// produced an indeterminate result (a tie at the minimum hit distance,
    /// or a hit exactly on a vertex) even after retrying with a perturbed
    /// angle.
    IndeterminateRay {
        boundary: BoundaryId,
        attempts: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry { shape_id, subpath_index } => {
                write!(f, "shape {shape_id}, subpath {subpath_index}: non-finite coordinate in input geometry")
            }
            Error::NumericalFailure { phase, detail } => {
                write!(f, "numerical failure in phase `{phase}`: {detail}")
            }
            Error::IndeterminateRay { boundary, attempts } => {
                write!(f, "{boundary}: extreme-ray cast stayed indeterminate after {attempts} attempt(s)")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
