//! Strongly-typed coordinate primitives for rectmerge.
//!
//! Design goals:
//! - Absolute positions and relative displacements are distinct types
//! - Converting between them is always explicit (`From`, never implicit)
//! - Position + Vector = Position; there is no Position + Position

use std::fmt;
use std::ops::{Add, AddAssign};

use glam::IVec2;

/// Signed integer unit for lengths and positions
pub type ScalarType = i32;

/// A single coordinate value
pub type Coordinate = ScalarType;

/// Product of two scalars; wide enough that `width * height` never overflows
pub type Area = u64;

/// Shared `(x, y)` accessors for the coordinate-pair types.
pub trait Coordinates {
    fn x(&self) -> Coordinate;
    fn y(&self) -> Coordinate;
}

/// An absolute location in the plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Position(IVec2);

impl Position {
    pub const ORIGIN: Position = Position(IVec2::ZERO);

    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Position(IVec2::new(x, y))
    }

    /// The point `(0, 0)`
    #[inline]
    pub const fn origin() -> Self {
        Self::ORIGIN
    }

    /// Mirror across the line `y = x`
    pub fn reflection(self) -> Self {
        Position::new(self.0.y, self.0.x)
    }

    /// Translate by `v`, or `None` if either coordinate leaves the scalar range.
    pub fn checked_add(self, v: Vector) -> Option<Self> {
        Some(Position::new(
            self.0.x.checked_add(v.0.x)?,
            self.0.y.checked_add(v.0.y)?,
        ))
    }
}

impl Coordinates for Position {
    #[inline]
    fn x(&self) -> Coordinate { self.0.x }
    #[inline]
    fn y(&self) -> Coordinate { self.0.y }
}

/// A relative offset; use this for translations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Vector(IVec2);

impl Vector {
    pub const ZERO: Vector = Vector(IVec2::ZERO);

    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Vector(IVec2::new(x, y))
    }

    /// Swap the two components
    pub fn reflection(self) -> Self {
        Vector::new(self.0.y, self.0.x)
    }
}

impl Coordinates for Vector {
    #[inline]
    fn x(&self) -> Coordinate { self.0.x }
    #[inline]
    fn y(&self) -> Coordinate { self.0.y }
}

/// Treat a position as its offset from the origin
impl From<Position> for Vector {
    fn from(p: Position) -> Vector { Vector(p.0) }
}

/// The position reached by applying an offset to the origin
impl From<Vector> for Position {
    fn from(v: Vector) -> Position { Position(v.0) }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector { Vector(self.0 + rhs.0) }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.0 += rhs.0;
    }
}

/// Translate a position in place
impl AddAssign<Vector> for Position {
    fn add_assign(&mut self, rhs: Vector) {
        self.0 += rhs.0;
    }
}

/// Add an offset to a position to get a new position
impl Add<Vector> for Position {
    type Output = Position;
    fn add(self, rhs: Vector) -> Position { Position(self.0 + rhs.0) }
}

impl Add<Position> for Vector {
    type Output = Position;
    fn add(self, rhs: Position) -> Position { rhs + self }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Position tests ====================

    #[test]
    fn origin_is_zero() {
        assert_eq!(Position::origin(), Position::new(0, 0));
        assert_eq!(Position::ORIGIN.x(), 0);
        assert_eq!(Position::ORIGIN.y(), 0);
    }

    #[test]
    fn position_equality_is_component_wise() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
    }

    #[test]
    fn position_reflection_swaps_axes() {
        let p = Position::new(3, -7);
        assert_eq!(p.reflection(), Position::new(-7, 3));
    }

    #[test]
    fn position_plus_vector_gives_position() {
        let p = Position::new(1, 2);
        let v = Vector::new(3, 4);
        assert_eq!(p + v, Position::new(4, 6));
        assert_eq!(v + p, Position::new(4, 6));
    }

    #[test]
    fn position_add_assign_translates_in_place() {
        let mut p = Position::new(-1, 5);
        p += Vector::new(1, -5);
        assert_eq!(p, Position::ORIGIN);
    }

    // ==================== Vector tests ====================

    #[test]
    fn vector_addition() {
        let a = Vector::new(1, 2);
        let b = Vector::new(-4, 10);
        assert_eq!(a + b, Vector::new(-3, 12));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn vector_reflection_swaps_axes() {
        assert_eq!(Vector::new(2, 9).reflection(), Vector::new(9, 2));
    }

    #[test]
    fn explicit_conversions_keep_components() {
        let p = Position::new(5, -3);
        let v = Vector::from(p);
        assert_eq!((v.x(), v.y()), (5, -3));
        assert_eq!(Position::from(v), p);
    }

    #[test]
    fn display_distinguishes_positions_from_vectors() {
        assert_eq!(Position::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Vector::new(1, -2).to_string(), "<1, -2>");
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn vector_addition_is_commutative(
            ax in -10_000i32..10_000, ay in -10_000i32..10_000,
            bx in -10_000i32..10_000, by in -10_000i32..10_000,
        ) {
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn double_reflection_is_identity(x in any::<i32>(), y in any::<i32>()) {
            prop_assert_eq!(Position::new(x, y).reflection().reflection(), Position::new(x, y));
            prop_assert_eq!(Vector::new(x, y).reflection().reflection(), Vector::new(x, y));
        }

        #[test]
        fn translation_composes(
            x in -10_000i32..10_000, y in -10_000i32..10_000,
            ax in -10_000i32..10_000, ay in -10_000i32..10_000,
            bx in -10_000i32..10_000, by in -10_000i32..10_000,
        ) {
            let p = Position::new(x, y);
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            prop_assert_eq!((p + a) + b, p + (a + b));
        }
    }
}
