//! Validation Session
//!
//! Binds a page size and the elements under test, runs checks in call order
//! and concludes with a verdict. A session owns its error list; nothing is
//! shared between sessions.

use serde::Serialize;
use thiserror::Error;

use crate::condition::{Axis, Condition, Units};
use crate::geometry::{Element, PageSize};
use crate::validation::engine::{self, Edge, Padding, SizeProperty};
use crate::validation::errors::{ErrorRecord, Errors};
use crate::validation::grid;
use crate::validation::relative::{self, Direction};

/// Failure recorded when a session has nothing to validate
pub const MISSING_ROOT_MESSAGE: &str = "Set root web element";

/// Misuse of the session API. These abort the call instead of being recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFault {
    #[error("session already concluded, no further checks are accepted")]
    SessionConcluded,
    #[error("'{0}' needs at least one element to compare with")]
    EmptyElementList(&'static str),
    #[error("'{check}' needs a single subject, but the session validates a list of {count} elements")]
    NoSingleSubject { check: &'static str, count: usize },
}

type CheckResult<'a> = Result<&'a mut Session, ValidationFault>;

/// Shape of the input under validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(Element),
    /// Subject first, then the partner that comparisons default to
    Pair([Element; 2]),
    Chunk(Vec<Element>),
}

impl Target {
    /// Element that subject checks apply to
    fn subject(&self) -> Option<&Element> {
        match self {
            Target::Single(element) => Some(element),
            Target::Pair(pair) => Some(&pair[0]),
            Target::Chunk(_) => None,
        }
    }

    /// Elements that list checks apply to
    fn elements(&self) -> &[Element] {
        match self {
            Target::Single(element) => std::slice::from_ref(element),
            Target::Pair(pair) => &pair[..],
            Target::Chunk(elements) => elements.as_slice(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Target::Single(element) | Target::Pair([element, _]) => element.label(),
            Target::Chunk(elements) => format!("list of {} elements", elements.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Evaluating,
    Concluded,
}

/// Outcome of a concluded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub errors: Vec<ErrorRecord>,
}

impl Verdict {
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// One run of checks against one target
#[derive(Debug)]
pub struct Session {
    page: PageSize,
    target: Option<Target>,
    units: Units,
    state: SessionState,
    errors: Errors,
}

impl Session {
    /// Start a session; a missing or empty target records the missing-root failure
    pub fn new(page: PageSize, target: Option<Target>) -> Self {
        let target = target.filter(|t| !t.elements().is_empty());
        let mut errors = Errors::new();
        if target.is_none() {
            errors.add(MISSING_ROOT_MESSAGE.to_string());
        }
        Self {
            page,
            target,
            units: Units::default(),
            state: SessionState::Created,
            errors,
        }
    }

    pub fn for_element(page: PageSize, element: Element) -> Self {
        Self::new(page, Some(Target::Single(element)))
    }

    pub fn for_pair(page: PageSize, subject: Element, other: Element) -> Self {
        Self::new(page, Some(Target::Pair([subject, other])))
    }

    pub fn for_chunk(page: PageSize, elements: Vec<Element>) -> Self {
        Self::new(page, Some(Target::Chunk(elements)))
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Element bound as the subject's partner, for pair targets
    pub fn partner(&self) -> Option<&Element> {
        match &self.target {
            Some(Target::Pair([_, partner])) => Some(partner),
            _ => None,
        }
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn has_failures(&self) -> bool {
        self.errors.has_failures()
    }

    /// Units for padding and offset-bound arguments of later checks
    pub fn change_metrics_units_to(&mut self, units: Units) -> CheckResult<'_> {
        self.enter()?;
        self.units = units;
        Ok(self)
    }

    /// Finish the session. Further checks fail with [`ValidationFault::SessionConcluded`].
    pub fn conclude(&mut self) -> Verdict {
        if self.state != SessionState::Concluded {
            self.state = SessionState::Concluded;
            log::info!(
                "validated {}: {} failure(s)",
                self.target
                    .as_ref()
                    .map(Target::describe)
                    .unwrap_or_else(|| "missing element".to_string()),
                self.errors.len()
            );
        }
        Verdict {
            passed: !self.errors.has_failures(),
            errors: self.errors.records().to_vec(),
        }
    }

    /// Conclude and return true iff nothing failed
    pub fn validate(&mut self) -> bool {
        self.conclude().passed
    }

    fn enter(&mut self) -> Result<(), ValidationFault> {
        match self.state {
            SessionState::Concluded => Err(ValidationFault::SessionConcluded),
            _ => {
                self.state = SessionState::Evaluating;
                Ok(())
            }
        }
    }

    /// Run a check against the single subject
    fn check_subject<F>(&mut self, check: &'static str, f: F) -> CheckResult<'_>
    where
        F: FnOnce(&Element, PageSize, Units, &mut Errors),
    {
        self.enter()?;
        if let Some(target) = &self.target {
            let subject = target
                .subject()
                .ok_or(ValidationFault::NoSingleSubject {
                    check,
                    count: target.elements().len(),
                })?;
            f(subject, self.page, self.units, &mut self.errors);
        }
        Ok(self)
    }

    /// Run a check comparing the subject with a non-empty list of others.
    ///
    /// A pair target compares with its bound partner when `others` is empty.
    fn check_subject_against<F>(
        &mut self,
        check: &'static str,
        others: &[Element],
        f: F,
    ) -> CheckResult<'_>
    where
        F: Fn(&Element, &Element, PageSize, &mut Errors),
    {
        self.enter()?;
        let partner = match &self.target {
            Some(Target::Pair([_, partner])) if others.is_empty() => Some(partner.clone()),
            _ => None,
        };
        let others = match &partner {
            Some(partner) => std::slice::from_ref(partner),
            None => others,
        };
        if others.is_empty() {
            return Err(ValidationFault::EmptyElementList(check));
        }
        self.check_subject(check, |subject, page, _, errors| {
            for other in others {
                f(subject, other, page, errors);
            }
        })
    }

    /// Run a check over every bound element
    fn check_elements<F>(&mut self, f: F) -> CheckResult<'_>
    where
        F: FnOnce(&[Element], PageSize, &mut Errors),
    {
        self.enter()?;
        if let Some(target) = &self.target {
            f(target.elements(), self.page, &mut self.errors);
        }
        Ok(self)
    }

    // --- subject checks: offsets ------------------------------------------

    /// Subject shares the `edge` page offset with each of `others`
    pub fn has_same_offset_as(&mut self, edge: Edge, others: &[Element]) -> CheckResult<'_> {
        self.check_subject_against("has_same_offset_as", others, |s, o, _, errors| {
            engine::validate_same_offset(s, o, edge, errors)
        })
    }

    pub fn is_left_aligned_with(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same_offset_as(Edge::Left, std::slice::from_ref(other))
    }

    pub fn is_right_aligned_with(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same_offset_as(Edge::Right, std::slice::from_ref(other))
    }

    pub fn is_top_aligned_with(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same_offset_as(Edge::Top, std::slice::from_ref(other))
    }

    pub fn is_bottom_aligned_with(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same_offset_as(Edge::Bottom, std::slice::from_ref(other))
    }

    /// Lower bounds for the page offsets, in session units
    pub fn min_offset(&mut self, top: i32, right: i32, bottom: i32, left: i32) -> CheckResult<'_> {
        self.offset_bounds("min_offset", [top, right, bottom, left], true)
    }

    /// Upper bounds for the page offsets, in session units
    pub fn max_offset(&mut self, top: i32, right: i32, bottom: i32, left: i32) -> CheckResult<'_> {
        self.offset_bounds("max_offset", [top, right, bottom, left], false)
    }

    fn offset_bounds(
        &mut self,
        check: &'static str,
        bounds: [i32; 4],
        at_least: bool,
    ) -> CheckResult<'_> {
        self.check_subject(check, |subject, page, units, errors| {
            let edges = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
            for (edge, bound) in edges.into_iter().zip(bounds) {
                let pixels = units.resolve(bound, page, edge.axis());
                let condition = if at_least {
                    Condition::greater_or_equal_to(pixels)
                } else {
                    Condition::less_or_equal_to(pixels)
                };
                engine::validate_offset(subject, edge, &condition, page, errors);
            }
        })
    }

    /// One page offset of the subject satisfies `condition`
    pub fn has_offset(&mut self, edge: Edge, condition: Condition) -> CheckResult<'_> {
        self.check_subject("has_offset", |subject, page, _, errors| {
            engine::validate_offset(subject, edge, &condition, page, errors)
        })
    }

    pub fn is_centered_on_page_horizontally(&mut self) -> CheckResult<'_> {
        self.check_subject("is_centered_on_page_horizontally", |subject, page, _, errors| {
            engine::validate_centered_horizontally(subject, &subject.label(), page, errors)
        })
    }

    pub fn is_centered_on_page_vertically(&mut self) -> CheckResult<'_> {
        self.check_subject("is_centered_on_page_vertically", |subject, page, _, errors| {
            engine::validate_centered_vertically(subject, &subject.label(), page, errors)
        })
    }

    // --- subject checks: sizes --------------------------------------------

    /// Subject has the same `property` as each of `others`
    pub fn has_same(&mut self, property: SizeProperty, others: &[Element]) -> CheckResult<'_> {
        self.check_subject_against("has_same", others, |s, o, _, errors| {
            engine::validate_same_size_property(s, o, property, true, errors)
        })
    }

    /// Subject differs in `property` from each of `others`
    pub fn has_different(&mut self, property: SizeProperty, others: &[Element]) -> CheckResult<'_> {
        self.check_subject_against("has_different", others, |s, o, _, errors| {
            engine::validate_same_size_property(s, o, property, false, errors)
        })
    }

    pub fn has_equal_width_as(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same(SizeProperty::Width, std::slice::from_ref(other))
    }

    pub fn has_equal_height_as(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same(SizeProperty::Height, std::slice::from_ref(other))
    }

    pub fn has_equal_size_as(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_same(SizeProperty::Size, std::slice::from_ref(other))
    }

    pub fn has_different_width_as(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_different(SizeProperty::Width, std::slice::from_ref(other))
    }

    pub fn has_different_height_as(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_different(SizeProperty::Height, std::slice::from_ref(other))
    }

    pub fn has_different_size_as(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_different(SizeProperty::Size, std::slice::from_ref(other))
    }

    pub fn has_width(&mut self, condition: Condition) -> CheckResult<'_> {
        self.check_subject("has_width", |subject, page, _, errors| {
            engine::validate_extent(subject, Axis::Horizontal, &condition, page, errors)
        })
    }

    pub fn has_height(&mut self, condition: Condition) -> CheckResult<'_> {
        self.check_subject("has_height", |subject, page, _, errors| {
            engine::validate_extent(subject, Axis::Vertical, &condition, page, errors)
        })
    }

    pub fn min_width(&mut self, width: i32) -> CheckResult<'_> {
        self.extent_limit("min_width", Axis::Horizontal, width, true)
    }

    pub fn max_width(&mut self, width: i32) -> CheckResult<'_> {
        self.extent_limit("max_width", Axis::Horizontal, width, false)
    }

    pub fn min_height(&mut self, height: i32) -> CheckResult<'_> {
        self.extent_limit("min_height", Axis::Vertical, height, true)
    }

    pub fn max_height(&mut self, height: i32) -> CheckResult<'_> {
        self.extent_limit("max_height", Axis::Vertical, height, false)
    }

    fn extent_limit(
        &mut self,
        check: &'static str,
        axis: Axis,
        limit: i32,
        at_least: bool,
    ) -> CheckResult<'_> {
        self.check_subject(check, |subject, page, units, errors| {
            let pixels = units.resolve(limit, page, axis);
            engine::validate_extent_limit(subject, axis, pixels, at_least, errors)
        })
    }

    // --- subject checks: overlap and containment --------------------------

    pub fn is_overlapping(&mut self, other: &Element) -> CheckResult<'_> {
        self.is_overlapping_all(std::slice::from_ref(other))
    }

    pub fn is_not_overlapping(&mut self, other: &Element) -> CheckResult<'_> {
        self.is_not_overlapping_all(std::slice::from_ref(other))
    }

    pub fn is_overlapping_all(&mut self, others: &[Element]) -> CheckResult<'_> {
        self.check_subject_against("is_overlapping", others, |s, o, _, errors| {
            engine::validate_overlap(s, o, true, errors)
        })
    }

    pub fn is_not_overlapping_all(&mut self, others: &[Element]) -> CheckResult<'_> {
        self.check_subject_against("is_not_overlapping", others, |s, o, _, errors| {
            engine::validate_overlap(s, o, false, errors)
        })
    }

    /// Subject lies within `container`, named `container_name` in messages
    pub fn is_inside_of(&mut self, container: &Element, container_name: &str) -> CheckResult<'_> {
        self.check_subject("is_inside_of", |subject, _, _, errors| {
            engine::validate_inside_of(subject, &subject.label(), container, container_name, errors)
        })
    }

    /// Subject lies within `container` keeping at least `padding` (session units) on every side
    pub fn is_inside_of_with_padding(
        &mut self,
        container: &Element,
        padding: Padding,
    ) -> CheckResult<'_> {
        self.check_subject("is_inside_of_with_padding", |subject, page, units, errors| {
            let expected = Padding {
                top: units.resolve(padding.top, page, Axis::Vertical),
                right: units.resolve(padding.right, page, Axis::Horizontal),
                bottom: units.resolve(padding.bottom, page, Axis::Vertical),
                left: units.resolve(padding.left, page, Axis::Horizontal),
            };
            engine::validate_inside_with_padding(subject, container, expected, errors)
        })
    }

    // --- subject checks: relative position --------------------------------

    /// `other` sits on the `direction` side of the subject with a gap matching `margin`
    pub fn has_neighbour(
        &mut self,
        other: &Element,
        direction: Direction,
        margin: Condition,
    ) -> CheckResult<'_> {
        self.check_subject("has_neighbour", |subject, page, _, errors| {
            relative::validate_relative_margin(subject, other, direction, &margin, page, errors)
        })
    }

    /// `other` lines up with the subject as a row or column on the `direction` side
    pub fn has_aligned_neighbour(
        &mut self,
        other: &Element,
        direction: Direction,
    ) -> CheckResult<'_> {
        self.check_subject("has_aligned_neighbour", |subject, _, _, errors| {
            relative::validate_relative_alignment(subject, other, direction, errors)
        })
    }

    /// Subject is above `other`, stacked in one column
    pub fn is_above(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_aligned_neighbour(other, Direction::Below)
    }

    pub fn is_above_with_margin(
        &mut self,
        other: &Element,
        margin: impl Into<Condition>,
    ) -> CheckResult<'_> {
        self.has_neighbour(other, Direction::Below, margin.into())
    }

    pub fn is_below(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_aligned_neighbour(other, Direction::Above)
    }

    pub fn is_below_with_margin(
        &mut self,
        other: &Element,
        margin: impl Into<Condition>,
    ) -> CheckResult<'_> {
        self.has_neighbour(other, Direction::Above, margin.into())
    }

    pub fn is_left_of(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_aligned_neighbour(other, Direction::RightOf)
    }

    pub fn is_left_of_with_margin(
        &mut self,
        other: &Element,
        margin: impl Into<Condition>,
    ) -> CheckResult<'_> {
        self.has_neighbour(other, Direction::RightOf, margin.into())
    }

    pub fn is_right_of(&mut self, other: &Element) -> CheckResult<'_> {
        self.has_aligned_neighbour(other, Direction::LeftOf)
    }

    pub fn is_right_of_with_margin(
        &mut self,
        other: &Element,
        margin: impl Into<Condition>,
    ) -> CheckResult<'_> {
        self.has_neighbour(other, Direction::LeftOf, margin.into())
    }

    // --- list checks ------------------------------------------------------

    /// Adjacent elements share the `edge` page offset
    pub fn are_aligned(&mut self, edge: Edge) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            engine::validate_chunk_same_offset(elements, edge, errors)
        })
    }

    pub fn are_left_aligned(&mut self) -> CheckResult<'_> {
        self.are_aligned(Edge::Left)
    }

    pub fn are_right_aligned(&mut self) -> CheckResult<'_> {
        self.are_aligned(Edge::Right)
    }

    pub fn are_top_aligned(&mut self) -> CheckResult<'_> {
        self.are_aligned(Edge::Top)
    }

    pub fn are_bottom_aligned(&mut self) -> CheckResult<'_> {
        self.are_aligned(Edge::Bottom)
    }

    /// Adjacent elements have the same `property`
    pub fn have_same(&mut self, property: SizeProperty) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            engine::validate_chunk_size_property(elements, property, true, errors)
        })
    }

    /// Adjacent elements differ in `property`
    pub fn have_different(&mut self, property: SizeProperty) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            engine::validate_chunk_size_property(elements, property, false, errors)
        })
    }

    pub fn are_not_overlapped_with_each_other(&mut self) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            engine::validate_chunk_overlap(elements, false, errors)
        })
    }

    pub fn are_overlapped_with_each_other(&mut self) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            engine::validate_chunk_overlap(elements, true, errors)
        })
    }

    pub fn are_inside_of(&mut self, container: &Element, container_name: &str) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            engine::validate_chunk_inside_of(elements, container, container_name, errors)
        })
    }

    pub fn are_centered_on_page_horizontally(&mut self) -> CheckResult<'_> {
        self.check_elements(|elements, page, errors| {
            engine::validate_chunk_centered(elements, Axis::Horizontal, page, errors)
        })
    }

    pub fn are_centered_on_page_vertically(&mut self) -> CheckResult<'_> {
        self.check_elements(|elements, page, errors| {
            engine::validate_chunk_centered(elements, Axis::Vertical, page, errors)
        })
    }

    /// Elements form a grid of `columns` x `rows`; zero skips a dimension
    pub fn are_aligned_as_grid(&mut self, columns: usize, rows: usize) -> CheckResult<'_> {
        self.check_elements(|elements, _, errors| {
            grid::validate_grid_alignment(elements, columns, rows, errors)
        })
    }
}
