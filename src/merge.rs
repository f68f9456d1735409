//! Merge engine: fuse adjacent rectangles and fold whole collections.
//!
//! `merge_all` is a greedy left-to-right fold. At each step the running
//! rectangle is extended by the next member, trying the horizontal merge
//! first and then the vertical one. It never reorders members or
//! backtracks, so a tiling that only works in a different order is
//! rejected.

use crate::adjacency::{Axis, can_merge_horizontally, can_merge_vertically, merge_axis};
use crate::collection::Rectangles;
use crate::errors::GeometryError;
use crate::rect::Rectangle;

/// Stack `r2` on top of `r1`.
///
/// Fails with [`GeometryError::NotAdjacent`] unless `r2` starts at the
/// upper-left corner of `r1` and has the same width.
pub fn merge_horizontally(r1: &Rectangle, r2: &Rectangle) -> Result<Rectangle, GeometryError> {
    if !can_merge_horizontally(r1, r2) {
        return Err(GeometryError::NotAdjacent {
            axis: Axis::Horizontal,
            first: *r1,
            second: *r2,
        });
    }
    let height = r1
        .height()
        .checked_add(r2.height())
        .ok_or(GeometryError::Overflow { axis: Axis::Horizontal })?;
    Ok(Rectangle::from_parts(r1.width(), height, r1.pos()))
}

/// Place `r2` to the right of `r1`.
///
/// Fails with [`GeometryError::NotAdjacent`] unless `r2` starts at the
/// lower-right corner of `r1` and has the same height.
pub fn merge_vertically(r1: &Rectangle, r2: &Rectangle) -> Result<Rectangle, GeometryError> {
    if !can_merge_vertically(r1, r2) {
        return Err(GeometryError::NotAdjacent {
            axis: Axis::Vertical,
            first: *r1,
            second: *r2,
        });
    }
    let width = r1
        .width()
        .checked_add(r2.width())
        .ok_or(GeometryError::Overflow { axis: Axis::Vertical })?;
    Ok(Rectangle::from_parts(width, r1.height(), r1.pos()))
}

/// Fold every member of `rects`, in order, into a single rectangle.
///
/// Returns [`GeometryError::EmptyCollection`] for an empty input and
/// [`GeometryError::MergeImpossible`] at the first member that does not
/// extend everything merged so far. No partial result is returned.
pub fn merge_all(rects: &Rectangles) -> Result<Rectangle, GeometryError> {
    let mut members = rects.iter();
    let mut current = *members.next().ok_or(GeometryError::EmptyCollection)?;

    for (index, next) in members.enumerate().map(|(i, r)| (i + 1, r)) {
        let Some(axis) = merge_axis(&current, next) else {
            crate::log::warn!(index, accumulated = %current, next = %next, "merge impossible");
            return Err(GeometryError::MergeImpossible {
                index,
                accumulated: current,
                next: *next,
            });
        };

        current = match axis {
            Axis::Horizontal => merge_horizontally(&current, next)?,
            Axis::Vertical => merge_vertically(&current, next)?,
        };
        crate::log::debug!(index, axis = %axis, accumulated = %current, "merged");
    }

    Ok(current)
}
