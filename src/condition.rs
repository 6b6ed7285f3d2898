//! Numeric conditions
//!
//! A condition is a predicate over a measured pixel value: exact, one-sided or
//! bounded. Bounds may be given in pixels or as a percentage of the page, in
//! which case they are resolved against the page before comparing.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::PageSize;

/// Rejected condition construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    InvertedRange { lower: String, upper: String },
}

/// Page axis a percentage refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Page extent along this axis
    pub fn extent(self, page: PageSize) -> i32 {
        match self {
            Axis::Horizontal => page.width(),
            Axis::Vertical => page.height(),
        }
    }
}

/// Integer percentage of a page extent, truncated toward zero and
/// saturated to the `i32` range
fn percent_of(percent: i32, extent: i32) -> i32 {
    let pixels = i64::from(percent) * i64::from(extent) / 100;
    i32::try_from(pixels).unwrap_or(if pixels < 0 { i32::MIN } else { i32::MAX })
}

/// A bound inside a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Pixels(i32),
    /// Percentage of the page. Without an explicit axis the axis of the
    /// measured quantity is used.
    PercentOfPage(i32, Option<Axis>),
}

impl Value {
    pub fn px(pixels: i32) -> Self {
        Value::Pixels(pixels)
    }

    pub fn percent(percent: i32) -> Self {
        Value::PercentOfPage(percent, None)
    }

    pub fn percent_of(percent: i32, axis: Axis) -> Self {
        Value::PercentOfPage(percent, Some(axis))
    }

    /// Resolve to pixels against `page`, using `axis` unless the value names its own
    pub fn resolve(&self, page: PageSize, axis: Axis) -> i32 {
        match *self {
            Value::Pixels(pixels) => pixels,
            Value::PercentOfPage(percent, own_axis) => {
                percent_of(percent, own_axis.unwrap_or(axis).extent(page))
            }
        }
    }
}

impl From<i32> for Value {
    fn from(pixels: i32) -> Self {
        Value::Pixels(pixels)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Pixels(pixels) => write!(f, "{}px", pixels),
            Value::PercentOfPage(percent, _) => write!(f, "{}%", percent),
        }
    }
}

/// Predicate over a measured pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Exact(Value),
    GreaterOrEqual(Value),
    LessOrEqual(Value),
    Between(Value, Value),
}

impl Condition {
    pub fn exact(value: impl Into<Value>) -> Self {
        Condition::Exact(value.into())
    }

    pub fn greater_or_equal_to(value: impl Into<Value>) -> Self {
        Condition::GreaterOrEqual(value.into())
    }

    pub fn less_or_equal_to(value: impl Into<Value>) -> Self {
        Condition::LessOrEqual(value.into())
    }

    /// Inclusive range. Bounds in the same unit must be ordered.
    pub fn between(
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Result<Self, ConditionError> {
        let (lower, upper) = (lower.into(), upper.into());
        let inverted = match (lower, upper) {
            (Value::Pixels(lo), Value::Pixels(hi)) => lo > hi,
            (Value::PercentOfPage(lo, lo_axis), Value::PercentOfPage(hi, hi_axis)) => {
                lo_axis == hi_axis && lo > hi
            }
            // Mixed units can only be ordered once a page is known
            _ => false,
        };
        if inverted {
            return Err(ConditionError::InvertedRange {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Condition::Between(lower, upper))
    }

    /// Check `measured` (pixels along `axis`) against this condition
    pub fn evaluate(&self, measured: i32, page: PageSize, axis: Axis) -> bool {
        match self {
            Condition::Exact(value) => measured == value.resolve(page, axis),
            Condition::GreaterOrEqual(value) => measured >= value.resolve(page, axis),
            Condition::LessOrEqual(value) => measured <= value.resolve(page, axis),
            Condition::Between(lower, upper) => {
                let lower = lower.resolve(page, axis);
                let upper = upper.resolve(page, axis);
                lower <= measured && measured <= upper
            }
        }
    }

    /// Phrase used inside failure messages
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Exact(value) => write!(f, "{}", value),
            Condition::GreaterOrEqual(value) => write!(f, "greater or equal to {}", value),
            Condition::LessOrEqual(value) => write!(f, "less or equal to {}", value),
            Condition::Between(lower, upper) => write!(f, "between {} and {}", lower, upper),
        }
    }
}

/// Accepted gap between two elements, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginRange {
    min: i32,
    max: Option<i32>,
}

impl Default for MarginRange {
    fn default() -> Self {
        Self { min: 0, max: None }
    }
}

impl MarginRange {
    pub fn new(min: i32, max: i32) -> Result<Self, ConditionError> {
        if min > max {
            return Err(ConditionError::InvertedRange {
                lower: Value::Pixels(min).to_string(),
                upper: Value::Pixels(max).to_string(),
            });
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    /// Any gap of at least `min` pixels
    pub fn at_least(min: i32) -> Self {
        Self { min, max: None }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }
}

impl From<MarginRange> for Condition {
    fn from(range: MarginRange) -> Self {
        match range.max {
            Some(max) => Condition::Between(Value::Pixels(range.min), Value::Pixels(max)),
            None => Condition::GreaterOrEqual(Value::Pixels(range.min)),
        }
    }
}

/// Unit for plain integer arguments such as paddings and offset bounds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    #[serde(alias = "pixels")]
    #[value(alias = "pixels")]
    Px,
    Percent,
}

impl Units {
    /// Convert an argument given in these units to pixels
    pub fn resolve(self, amount: i32, page: PageSize, axis: Axis) -> i32 {
        match self {
            Units::Px => amount,
            Units::Percent => percent_of(amount, axis.extent(page)),
        }
    }
}
