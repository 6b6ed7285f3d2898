//! Validation Engine
//!
//! Check families over elements and a page size. Every check appends zero or
//! more records to the given [`Errors`] and never stops at the first failure.
//!
//! Record convention: when a subject is compared with another element, the
//! other element is the primary snapshot and the subject the secondary one.
//! In list checks the later element of a pair is the primary snapshot.

use serde::{Deserialize, Serialize};

use crate::condition::{Axis, Condition};
use crate::geometry::{Element, PageSize, Rectangle};
use crate::validation::errors::Errors;

/// Element edge whose page offset is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn name(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }

    /// Distance between this edge of `rect` and the same edge of the page
    pub fn offset(self, rect: &Rectangle, page: PageSize) -> i32 {
        match self {
            Edge::Left => rect.x(),
            Edge::Right => rect.right_offset(page),
            Edge::Top => rect.y(),
            Edge::Bottom => rect.bottom_offset(page),
        }
    }

    fn same_offset(self, a: &Rectangle, b: &Rectangle) -> bool {
        match self {
            Edge::Left => a.has_equal_left_offset_as(b),
            Edge::Right => a.has_equal_right_offset_as(b),
            Edge::Top => a.has_equal_top_offset_as(b),
            Edge::Bottom => a.has_equal_bottom_offset_as(b),
        }
    }
}

/// Dimension compared between elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeProperty {
    Width,
    Height,
    Size,
}

impl SizeProperty {
    fn name(self) -> &'static str {
        match self {
            SizeProperty::Width => "width",
            SizeProperty::Height => "height",
            SizeProperty::Size => "size",
        }
    }

    fn same(self, a: &Rectangle, b: &Rectangle) -> bool {
        match self {
            SizeProperty::Width => a.has_same_width_as(b),
            SizeProperty::Height => a.has_same_height_as(b),
            SizeProperty::Size => a.has_same_size_as(b),
        }
    }

    /// `Width of 'x' is 400px` style phrase for one element
    fn measure(self, label: &str, rect: &Rectangle) -> String {
        match self {
            SizeProperty::Width => format!("Width of {} is {}px", label, rect.width()),
            SizeProperty::Height => format!("Height of {} is {}px", label, rect.height()),
            SizeProperty::Size => format!(
                "Size of {} is {}px x {}px",
                label,
                rect.width(),
                rect.height()
            ),
        }
    }
}

/// Expected distance between a container's edges and the element inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Padding actually found between `container` and `subject`
    pub fn between(container: &Rectangle, subject: &Rectangle) -> Self {
        Self {
            top: subject.y().saturating_sub(container.y()),
            right: container.right_edge().saturating_sub(subject.right_edge()),
            bottom: container.bottom_edge().saturating_sub(subject.bottom_edge()),
            left: subject.x().saturating_sub(container.x()),
        }
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "width",
        Axis::Vertical => "height",
    }
}

fn extent(rect: &Rectangle, axis: Axis) -> i32 {
    match axis {
        Axis::Horizontal => rect.width(),
        Axis::Vertical => rect.height(),
    }
}

// --- offsets -------------------------------------------------------------

/// Subject and `other` share the page offset of `edge`
pub fn validate_same_offset(subject: &Element, other: &Element, edge: Edge, errors: &mut Errors) {
    if !edge.same_offset(subject.rectangle(), other.rectangle()) {
        errors.add_for_pair(
            format!(
                "Element '{}' has not the same {} offset as element '{}'",
                subject.label(),
                edge.name(),
                other.label()
            ),
            other,
            subject,
        );
    }
}

/// Each adjacent pair of `elements` shares the page offset of `edge`
pub fn validate_chunk_same_offset(elements: &[Element], edge: Edge, errors: &mut Errors) {
    for (i, pair) in elements.windows(2).enumerate() {
        let (element, next) = (&pair[0], &pair[1]);
        if !edge.same_offset(element.rectangle(), next.rectangle()) {
            errors.add_for_pair(
                format!(
                    "Element {} has not the same {} offset as element {}",
                    element.indexed_label(i),
                    edge.name(),
                    next.indexed_label(i + 1)
                ),
                next,
                element,
            );
        }
    }
}

/// Page offset of `edge` satisfies `condition`
pub fn validate_offset(
    subject: &Element,
    edge: Edge,
    condition: &Condition,
    page: PageSize,
    errors: &mut Errors,
) {
    let actual = edge.offset(subject.rectangle(), page);
    if !condition.evaluate(actual, page, edge.axis()) {
        errors.add_for(
            format!(
                "Expected {} offset of element '{}' to be {}. Actual {} offset is: {}px",
                edge.name(),
                subject.label(),
                condition,
                edge.name(),
                actual
            ),
            subject,
        );
    }
}

// --- centering -----------------------------------------------------------

pub fn validate_centered_horizontally(
    element: &Element,
    label: &str,
    page: PageSize,
    errors: &mut Errors,
) {
    let rect = element.rectangle();
    if !rect.has_equal_left_right_offset(page) {
        errors.add_for(
            format!(
                "Element '{}' has not equal left and right offset. Left offset is {}px, right is {}px",
                label,
                rect.x(),
                rect.right_offset(page)
            ),
            element,
        );
    }
}

pub fn validate_centered_vertically(
    element: &Element,
    label: &str,
    page: PageSize,
    errors: &mut Errors,
) {
    let rect = element.rectangle();
    if !rect.has_equal_top_bottom_offset(page) {
        errors.add_for(
            format!(
                "Element '{}' has not equal top and bottom offset. Top offset is {}px, bottom is {}px",
                label,
                rect.y(),
                rect.bottom_offset(page)
            ),
            element,
        );
    }
}

/// Every element of the list is centered along `axis`
pub fn validate_chunk_centered(
    elements: &[Element],
    axis: Axis,
    page: PageSize,
    errors: &mut Errors,
) {
    for element in elements {
        let label = element.describe_properties();
        match axis {
            Axis::Horizontal => validate_centered_horizontally(element, &label, page, errors),
            Axis::Vertical => validate_centered_vertically(element, &label, page, errors),
        }
    }
}

// --- sizes ---------------------------------------------------------------

/// Subject and `other` have the same (or, negated, a different) `property`
pub fn validate_same_size_property(
    subject: &Element,
    other: &Element,
    property: SizeProperty,
    expect_same: bool,
    errors: &mut Errors,
) {
    if property.same(subject.rectangle(), other.rectangle()) == expect_same {
        return;
    }
    let subject_label = subject.label();
    let relation = if expect_same { "has not the same" } else { "has the same" };
    errors.add_for_pair(
        format!(
            "Element '{}' {} {} as element '{}'. {}. {}",
            subject_label,
            relation,
            property.name(),
            other.label(),
            property.measure(&format!("'{}'", subject_label), subject.rectangle()),
            property.measure("element", other.rectangle())
        ),
        other,
        subject,
    );
}

/// Each adjacent pair has the same (or, negated, a different) `property`.
///
/// A failing pair records one failure per side.
pub fn validate_chunk_size_property(
    elements: &[Element],
    property: SizeProperty,
    expect_same: bool,
    errors: &mut Errors,
) {
    let relation = if expect_same { "different" } else { "same" };
    for (i, pair) in elements.windows(2).enumerate() {
        if property.same(pair[0].rectangle(), pair[1].rectangle()) == expect_same {
            continue;
        }
        for (offset, element) in pair.iter().enumerate() {
            let rect = element.rectangle();
            errors.add_for(
                format!(
                    "Element #{} has {} {}. Element {} is: [{}, {}]",
                    i + offset + 1,
                    relation,
                    property.name(),
                    property.name(),
                    rect.width(),
                    rect.height()
                ),
                element,
            );
        }
    }
}

/// Width or height of the subject satisfies `condition`
pub fn validate_extent(
    subject: &Element,
    axis: Axis,
    condition: &Condition,
    page: PageSize,
    errors: &mut Errors,
) {
    let actual = extent(subject.rectangle(), axis);
    if !condition.evaluate(actual, page, axis) {
        report_extent(subject, axis, &condition.describe(), actual, errors);
    }
}

/// Width or height of the subject is at least (or at most) `limit` pixels
pub fn validate_extent_limit(
    subject: &Element,
    axis: Axis,
    limit: i32,
    at_least: bool,
    errors: &mut Errors,
) {
    let rect = subject.rectangle();
    let holds = match (axis, at_least) {
        (Axis::Horizontal, true) => rect.has_min_width(limit),
        (Axis::Horizontal, false) => rect.has_max_width(limit),
        (Axis::Vertical, true) => rect.has_min_height(limit),
        (Axis::Vertical, false) => rect.has_max_height(limit),
    };
    if !holds {
        let expected = if at_least {
            Condition::greater_or_equal_to(limit)
        } else {
            Condition::less_or_equal_to(limit)
        };
        report_extent(subject, axis, &expected.describe(), extent(rect, axis), errors);
    }
}

fn report_extent(subject: &Element, axis: Axis, expected: &str, actual: i32, errors: &mut Errors) {
    let name = axis_name(axis);
    errors.add_for(
        format!(
            "Expected {} of element '{}' to be {}. Actual {} is: {}px",
            name,
            subject.label(),
            expected,
            name,
            actual
        ),
        subject,
    );
}

// --- overlap -------------------------------------------------------------

pub fn validate_overlap(
    subject: &Element,
    other: &Element,
    expect_overlap: bool,
    errors: &mut Errors,
) {
    let overlaps = subject.rectangle().overlaps(other.rectangle());
    if overlaps == expect_overlap {
        return;
    }
    let message = if overlaps {
        format!(
            "Element '{}' is overlapped with element '{}' but should not",
            subject.label(),
            other.label()
        )
    } else {
        format!(
            "Element '{}' is not overlapped with element '{}' but should be",
            subject.label(),
            other.label()
        )
    };
    errors.add_for_pair(message, other, subject);
}

/// Checks all unordered pairs. An element stops being compared once it has
/// produced a failure, so each element is reported at most once as the
/// first member of a pair.
pub fn validate_chunk_overlap(elements: &[Element], expect_overlap: bool, errors: &mut Errors) {
    let message = if expect_overlap {
        "Elements are not overlapped"
    } else {
        "Elements are overlapped"
    };
    for (i, first) in elements.iter().enumerate() {
        for second in &elements[i + 1..] {
            if first.rectangle().overlaps(second.rectangle()) != expect_overlap {
                errors.add_for_pair(message.to_string(), first, second);
                break;
            }
        }
    }
}

// --- containment ---------------------------------------------------------

/// `element` lies within `container`; `label` names the element in the message
pub fn validate_inside_of(
    element: &Element,
    label: &str,
    container: &Element,
    container_name: &str,
    errors: &mut Errors,
) {
    if !container.rectangle().contains(element.rectangle()) {
        errors.add_for_pair(
            format!("Element '{}' is not inside of '{}'", label, container_name),
            container,
            element,
        );
    }
}

pub fn validate_chunk_inside_of(
    elements: &[Element],
    container: &Element,
    container_name: &str,
    errors: &mut Errors,
) {
    for element in elements {
        let label = element.describe_properties();
        validate_inside_of(element, &label, container, container_name, errors);
    }
}

/// `container` holds the subject grown by `expected` (already in pixels).
///
/// The message always lists all four sides, expected and actual.
pub fn validate_inside_with_padding(
    subject: &Element,
    container: &Element,
    expected: Padding,
    errors: &mut Errors,
) {
    let padded = subject.rectangle().expanded(
        expected.top,
        expected.right,
        expected.bottom,
        expected.left,
    );
    if container.rectangle().contains(&padded) {
        return;
    }
    let actual = Padding::between(container.rectangle(), subject.rectangle());
    errors.add_for_pair(
        format!(
            "Padding of element '{}' is incorrect. Expected padding: top[{}], right[{}], bottom[{}], left[{}]. Actual padding: top[{}], right[{}], bottom[{}], left[{}]",
            subject.label(),
            expected.top,
            expected.right,
            expected.bottom,
            expected.left,
            actual.top,
            actual.right,
            actual.bottom,
            actual.left
        ),
        container,
        subject,
    );
}
