//! Validation Engine
//!
//! Check families over already-measured elements, separated from session
//! bookkeeping and from how the geometry was obtained.

pub mod engine;
pub mod errors;
pub mod grid;
pub mod relative;

pub use engine::{Edge, Padding, SizeProperty};
pub use errors::{ErrorRecord, Errors};
pub use relative::Direction;
