//! Layout Assert
//!
//! Geometric assertions over measured on-screen elements.
//!
//! This library provides:
//! - Rectangle and element model with page offsets
//! - Numeric conditions in pixels or page percentages
//! - Check families for alignment, size, overlap, containment and grids
//! - Validation sessions that aggregate every failure into a verdict
//! - Scenario files describing elements and checks in TOML or JSON

pub mod condition;
pub mod config;
pub mod geometry;
pub mod scenario;
pub mod session;
pub mod validation;

pub use condition::{Axis, Condition, ConditionError, MarginRange, Units, Value};
pub use config::Config;
pub use geometry::{Element, GeometryError, PageSize, Rectangle};
pub use scenario::Scenario;
pub use session::{Session, Target, ValidationFault, Verdict};
pub use validation::{Direction, Edge, ErrorRecord, Errors, Padding, SizeProperty};
