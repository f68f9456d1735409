//! Adjacency predicates: can two rectangles be fused along one axis?
//!
//! Both checks are exact and directional. `r2` must start precisely where
//! `r1` ends and share the full length of the common edge.

use std::fmt;

use crate::rect::Rectangle;

/// Direction of a merge.
///
/// `Horizontal` stacks the second rectangle on top of the first (the shared
/// edge is horizontal); `Vertical` places it to the right (the shared edge
/// is vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontally"),
            Axis::Vertical => write!(f, "vertically"),
        }
    }
}

/// True when `r2` sits directly on top of `r1` with the same width.
///
/// A top edge outside the coordinate range has nothing above it.
pub fn can_merge_horizontally(r1: &Rectangle, r2: &Rectangle) -> bool {
    r1.width() == r2.width() && r1.top_left() == Some(r2.pos())
}

/// True when `r2` sits directly to the right of `r1` with the same height.
pub fn can_merge_vertically(r1: &Rectangle, r2: &Rectangle) -> bool {
    r1.height() == r2.height() && r1.bottom_right() == Some(r2.pos())
}

/// The axis along which `r2` extends `r1`, if any.
///
/// Horizontal is checked first. With positive dimensions both predicates
/// can never hold at once, but the order is still the tie-break.
pub fn merge_axis(r1: &Rectangle, r2: &Rectangle) -> Option<Axis> {
    if can_merge_horizontally(r1, r2) {
        Some(Axis::Horizontal)
    } else if can_merge_vertically(r1, r2) {
        Some(Axis::Vertical)
    } else {
        None
    }
}
