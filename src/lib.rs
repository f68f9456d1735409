//! Axis-aligned integer geometry: positions, displacement vectors,
//! rectangles, and collections of rectangles, plus a fold that merges a
//! sequence of edge-to-edge tiles into the single rectangle they cover.
//!
//! ```
//! use rectmerge::{Position, Rectangle, Rectangles, merge_all};
//!
//! let tiles = Rectangles::from(vec![
//!     Rectangle::try_at(2, 2, Position::new(0, 0)).unwrap(),
//!     Rectangle::try_at(2, 2, Position::new(0, 2)).unwrap(),
//!     Rectangle::try_at(2, 4, Position::new(2, 0)).unwrap(),
//! ]);
//! assert_eq!(merge_all(&tiles).unwrap(), Rectangle::try_new(4, 4).unwrap());
//! ```

pub mod adjacency;
pub mod collection;
pub mod errors;
pub mod log;
pub mod merge;
pub mod rect;
pub mod types;

pub use adjacency::{Axis, can_merge_horizontally, can_merge_vertically, merge_axis};
pub use collection::Rectangles;
pub use errors::GeometryError;
pub use merge::{merge_all, merge_horizontally, merge_vertically};
pub use rect::Rectangle;
pub use types::{Area, Coordinate, Coordinates, Position, ScalarType, Vector};
