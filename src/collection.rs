//! Ordered collections of rectangles.

use std::ops::{Add, AddAssign, Index, IndexMut};

use crate::errors::GeometryError;
use crate::rect::Rectangle;
use crate::types::Vector;

/// An ordered, index-addressable sequence of rectangles.
///
/// Order matters: it is the order in which [`merge_all`](crate::merge_all)
/// folds the members, and equality compares members index by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rectangles {
    items: Vec<Rectangle>,
}

impl Rectangles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, r: Rectangle) {
        self.items.push(r);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Same as [`len`](Self::len)
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checked access; the `Index` impl panics instead.
    pub fn get(&self, index: usize) -> Result<&Rectangle, GeometryError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(GeometryError::IndexOutOfBounds { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Rectangle, GeometryError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfBounds { index, len })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.items
    }

    /// Move every member by `v`.
    pub fn translate(&mut self, v: Vector) {
        for r in &mut self.items {
            r.translate(v);
        }
    }

    /// A copy with every member moved by `v`.
    pub fn translated(&self, v: Vector) -> Self {
        self.items.iter().map(|r| r.translated(v)).collect()
    }

    /// Fold all members into one rectangle; see [`crate::merge_all`].
    pub fn merge_all(&self) -> Result<Rectangle, GeometryError> {
        crate::merge::merge_all(self)
    }
}

impl From<Vec<Rectangle>> for Rectangles {
    fn from(items: Vec<Rectangle>) -> Self {
        Rectangles { items }
    }
}

impl FromIterator<Rectangle> for Rectangles {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        Rectangles { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for Rectangles {
    type Item = Rectangle;
    type IntoIter = std::vec::IntoIter<Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rectangles {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Panics when `index >= len()`; use [`Rectangles::get`] for a checked lookup.
impl Index<usize> for Rectangles {
    type Output = Rectangle;
    fn index(&self, index: usize) -> &Rectangle {
        &self.items[index]
    }
}

impl IndexMut<usize> for Rectangles {
    fn index_mut(&mut self, index: usize) -> &mut Rectangle {
        &mut self.items[index]
    }
}

impl AddAssign<Vector> for Rectangles {
    fn add_assign(&mut self, rhs: Vector) {
        self.translate(rhs);
    }
}

impl Add<Vector> for Rectangles {
    type Output = Rectangles;
    fn add(mut self, rhs: Vector) -> Rectangles {
        self.translate(rhs);
        self
    }
}

impl Add<Rectangles> for Vector {
    type Output = Rectangles;
    fn add(self, rhs: Rectangles) -> Rectangles { rhs + self }
}
