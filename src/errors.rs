//! Error types for geometric precondition failures.
//!
//! Every operation that can reject its input validates before building
//! anything, so an `Err` never comes with a partially updated value.

use miette::Diagnostic;
use thiserror::Error;

use crate::adjacency::Axis;
use crate::rect::Rectangle;
use crate::types::ScalarType;

/// Errors raised when an operation's preconditions do not hold
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("rectangle dimensions must be positive, got {width}x{height}")]
    #[diagnostic(
        code(rectmerge::rect::non_positive_dimension),
        help("both width and height must be greater than zero")
    )]
    NonPositiveDimension { width: ScalarType, height: ScalarType },

    #[error("index {index} out of bounds for collection of {len} rectangles")]
    #[diagnostic(code(rectmerge::collection::index_out_of_bounds))]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("{first} and {second} cannot be merged {axis}")]
    #[diagnostic(
        code(rectmerge::merge::not_adjacent),
        help("the rectangles must share a full edge of equal length")
    )]
    NotAdjacent {
        axis: Axis,
        first: Rectangle,
        second: Rectangle,
    },

    #[error("cannot merge an empty collection")]
    #[diagnostic(code(rectmerge::merge::empty_collection))]
    EmptyCollection,

    #[error("merge impossible at index {index}: {next} does not extend {accumulated}")]
    #[diagnostic(
        code(rectmerge::merge::impossible),
        help("each rectangle must share a full edge with everything merged before it")
    )]
    MergeImpossible {
        index: usize,
        accumulated: Rectangle,
        next: Rectangle,
    },

    #[error("merging {axis} overflows the coordinate range")]
    #[diagnostic(code(rectmerge::merge::overflow))]
    Overflow { axis: Axis },
}

impl GeometryError {
    /// True when the caller handed in geometrically invalid input, as
    /// opposed to valid input whose result does not fit the scalar type.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, GeometryError::Overflow { .. })
    }
}
