//! Axis-aligned rectangles anchored at their lower-left corner.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::errors::GeometryError;
use crate::types::{Area, Coordinates, Position, ScalarType, Vector};

/// An axis-aligned box with positive width and height.
///
/// The fields are private so the positive-dimension invariant can only be
/// established through [`Rectangle::try_new`] or [`Rectangle::try_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    width: ScalarType,
    height: ScalarType,
    corner: Position,
}

impl Rectangle {
    /// Create a rectangle whose lower-left corner sits at the origin.
    pub fn try_new(width: ScalarType, height: ScalarType) -> Result<Self, GeometryError> {
        Self::try_at(width, height, Position::ORIGIN)
    }

    /// Create a rectangle with its lower-left corner at `corner`.
    pub fn try_at(
        width: ScalarType,
        height: ScalarType,
        corner: Position,
    ) -> Result<Self, GeometryError> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::NonPositiveDimension { width, height });
        }
        Ok(Self::from_parts(width, height, corner))
    }

    /// Unchecked constructor; callers must already know both dimensions are positive.
    #[inline]
    pub(crate) const fn from_parts(width: ScalarType, height: ScalarType, corner: Position) -> Self {
        Rectangle { width, height, corner }
    }

    #[inline]
    pub fn width(&self) -> ScalarType { self.width }

    #[inline]
    pub fn height(&self) -> ScalarType { self.height }

    /// The lower-left corner
    #[inline]
    pub fn pos(&self) -> Position { self.corner }

    pub fn area(&self) -> Area {
        // Both factors are positive, so the widening casts are lossless.
        self.width as Area * self.height as Area
    }

    /// Mirror across the line `y = x`: dimensions swap and the corner is reflected.
    pub fn reflection(&self) -> Self {
        Self::from_parts(self.height, self.width, self.corner.reflection())
    }

    /// The upper-left corner, where a rectangle stacked on top must start.
    ///
    /// `None` when the top edge lies beyond the coordinate range.
    pub fn top_left(&self) -> Option<Position> {
        self.corner.checked_add(Vector::new(0, self.height))
    }

    /// The lower-right corner, where a rectangle placed to the right must start.
    ///
    /// `None` when the right edge lies beyond the coordinate range.
    pub fn bottom_right(&self) -> Option<Position> {
        self.corner.checked_add(Vector::new(self.width, 0))
    }

    /// Move the corner by `v`, keeping width and height.
    pub fn translate(&mut self, v: Vector) {
        self.corner += v;
    }

    /// A copy of this rectangle moved by `v`.
    pub fn translated(&self, v: Vector) -> Self {
        let mut moved = *self;
        moved.translate(v);
        moved
    }
}

impl AddAssign<Vector> for Rectangle {
    fn add_assign(&mut self, rhs: Vector) {
        self.translate(rhs);
    }
}

impl Add<Vector> for Rectangle {
    type Output = Rectangle;
    fn add(self, rhs: Vector) -> Rectangle { self.translated(rhs) }
}

impl Add<Rectangle> for Vector {
    type Output = Rectangle;
    fn add(self, rhs: Rectangle) -> Rectangle { rhs.translated(self) }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({}, {})", self.width, self.height, self.corner.x(), self.corner.y())
    }
}
