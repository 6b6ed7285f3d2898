//! Relative position checks
//!
//! Where another element sits relative to the subject. Margins are measured
//! in one direction only: asking "is the other element below" never looks at
//! whether it could also be above.

use serde::{Deserialize, Serialize};

use crate::condition::{Axis, Condition};
use crate::geometry::{Element, PageSize, Rectangle};
use crate::validation::errors::Errors;

/// Side of the subject on which the other element is expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Above,
    Below,
    LeftOf,
    RightOf,
}

impl Direction {
    fn element_name(self) -> &'static str {
        match self {
            Direction::Above => "Above",
            Direction::Below => "Below",
            Direction::LeftOf => "Left",
            Direction::RightOf => "Right",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Above | Direction::Below => Axis::Vertical,
            Direction::LeftOf | Direction::RightOf => Axis::Horizontal,
        }
    }

    /// Signed gap between the facing edges; negative when they intrude
    pub fn margin(self, subject: &Rectangle, other: &Rectangle) -> i32 {
        match self {
            Direction::Below => other.y().saturating_sub(subject.bottom_edge()),
            Direction::Above => subject.y().saturating_sub(other.bottom_edge()),
            Direction::RightOf => other.x().saturating_sub(subject.right_edge()),
            Direction::LeftOf => subject.x().saturating_sub(other.right_edge()),
        }
    }

    /// Pair in reading order: top to bottom, or left to right
    fn ordered<'a>(self, subject: &'a Rectangle, other: &'a Rectangle) -> [&'a Rectangle; 2] {
        match self {
            Direction::Below | Direction::RightOf => [subject, other],
            Direction::Above | Direction::LeftOf => [other, subject],
        }
    }
}

/// Elements form one column: same left edge, each starting below the previous one
pub fn aligned_vertically(rects: &[&Rectangle]) -> bool {
    rects
        .windows(2)
        .all(|w| w[0].x() == w[1].x() && w[0].bottom_edge() <= w[1].y())
}

/// Elements form one row: same top edge, each starting right of the previous one
pub fn aligned_horizontally(rects: &[&Rectangle]) -> bool {
    rects
        .windows(2)
        .all(|w| w[0].y() == w[1].y() && w[0].right_edge() <= w[1].x())
}

/// Gap between the subject and `other` on the `direction` side satisfies `margin`
pub fn validate_relative_margin(
    subject: &Element,
    other: &Element,
    direction: Direction,
    margin: &Condition,
    page: PageSize,
    errors: &mut Errors,
) {
    let actual = direction.margin(subject.rectangle(), other.rectangle());
    if !margin.evaluate(actual, page, direction.axis()) {
        errors.add_for_pair(
            format!(
                "{} element aligned not properly. Expected margin should be {}. Actual margin is {}px",
                direction.element_name(),
                margin,
                actual
            ),
            other,
            subject,
        );
    }
}

/// Subject and `other` line up as a row or column on the `direction` side
pub fn validate_relative_alignment(
    subject: &Element,
    other: &Element,
    direction: Direction,
    errors: &mut Errors,
) {
    let pair = direction.ordered(subject.rectangle(), other.rectangle());
    let aligned = match direction.axis() {
        Axis::Vertical => aligned_vertically(&pair),
        Axis::Horizontal => aligned_horizontally(&pair),
    };
    if !aligned {
        errors.add_for_pair(
            format!("{} element aligned not properly", direction.element_name()),
            other,
            subject,
        );
    }
}
