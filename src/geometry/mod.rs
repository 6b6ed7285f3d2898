//! Geometry Model
//!
//! Rectangles, page size and labelled elements. Pure data, no validation state.

pub mod element;
pub mod rectangle;

pub use element::{Element, ElementSnapshot};
pub use rectangle::{GeometryError, PageSize, Rectangle};
