//! Scenarios
//!
//! A scenario file names a page, the measured elements on it and the checks
//! to run. Loading resolves every element reference and condition up front,
//! so a scenario that loads can only fail by recording validation failures
//! or by asking a single-subject check of a list.

pub mod schema;

use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::path::Path;

use crate::condition::{Axis, Condition, Units};
use crate::geometry::{Element, PageSize, Rectangle};
use crate::session::{Session, Target, ValidationFault, Verdict};
use crate::validation::{Direction, Edge, Padding, SizeProperty};

pub use schema::{CheckDef, CheckKindDef, ElementDef, ScenarioFile, SubjectDef};

/// Elements a check applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    One(Element),
    Many(Vec<Element>),
}

/// A resolved check, element names replaced by elements
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    Aligned { edge: Edge, others: Vec<Element> },
    Offset { edge: Edge, condition: Condition },
    /// Bounds in top, right, bottom, left order
    MinOffset([i32; 4]),
    MaxOffset([i32; 4]),
    Centered(Axis),
    SameSize { property: SizeProperty, others: Vec<Element> },
    DifferentSize { property: SizeProperty, others: Vec<Element> },
    Width(Condition),
    Height(Condition),
    MinWidth(i32),
    MaxWidth(i32),
    MinHeight(i32),
    MaxHeight(i32),
    Overlapping(Vec<Element>),
    NotOverlapping(Vec<Element>),
    Inside {
        container: Element,
        container_name: String,
        padding: Option<Padding>,
    },
    Neighbour {
        other: Element,
        direction: Direction,
        margin: Option<Condition>,
    },
    Grid { columns: usize, rows: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub subject: Subject,
    pub kind: CheckKind,
}

impl Check {
    /// Session bound to this check's subject
    fn session(&self, page: PageSize) -> Session {
        let target = match (&self.subject, &self.kind) {
            (Subject::One(subject), CheckKind::Neighbour { other, .. }) => {
                Target::Pair([subject.clone(), other.clone()])
            }
            (Subject::One(subject), _) => Target::Single(subject.clone()),
            (Subject::Many(elements), _) => Target::Chunk(elements.clone()),
        };
        Session::new(page, Some(target))
    }

    /// Run this check on `session`, reading plain integer arguments in `units`
    fn apply(&self, session: &mut Session, units: Units) -> Result<(), ValidationFault> {
        session.change_metrics_units_to(units)?;
        let many = matches!(self.subject, Subject::Many(_));
        let result = match &self.kind {
            CheckKind::Aligned { edge, .. } if many => session.are_aligned(*edge),
            CheckKind::Aligned { edge, others } => session.has_same_offset_as(*edge, others),
            CheckKind::Offset { edge, condition } => session.has_offset(*edge, *condition),
            CheckKind::MinOffset([top, right, bottom, left]) => {
                session.min_offset(*top, *right, *bottom, *left)
            }
            CheckKind::MaxOffset([top, right, bottom, left]) => {
                session.max_offset(*top, *right, *bottom, *left)
            }
            CheckKind::Centered(Axis::Horizontal) if many => {
                session.are_centered_on_page_horizontally()
            }
            CheckKind::Centered(Axis::Vertical) if many => session.are_centered_on_page_vertically(),
            CheckKind::Centered(Axis::Horizontal) => session.is_centered_on_page_horizontally(),
            CheckKind::Centered(Axis::Vertical) => session.is_centered_on_page_vertically(),
            CheckKind::SameSize { property, .. } if many => session.have_same(*property),
            CheckKind::SameSize { property, others } => session.has_same(*property, others),
            CheckKind::DifferentSize { property, .. } if many => session.have_different(*property),
            CheckKind::DifferentSize { property, others } => {
                session.has_different(*property, others)
            }
            CheckKind::Width(condition) => session.has_width(*condition),
            CheckKind::Height(condition) => session.has_height(*condition),
            CheckKind::MinWidth(value) => session.min_width(*value),
            CheckKind::MaxWidth(value) => session.max_width(*value),
            CheckKind::MinHeight(value) => session.min_height(*value),
            CheckKind::MaxHeight(value) => session.max_height(*value),
            CheckKind::Overlapping(_) if many => session.are_overlapped_with_each_other(),
            CheckKind::Overlapping(others) => session.is_overlapping_all(others),
            CheckKind::NotOverlapping(_) if many => session.are_not_overlapped_with_each_other(),
            CheckKind::NotOverlapping(others) => session.is_not_overlapping_all(others),
            CheckKind::Inside {
                container,
                container_name,
                ..
            } if many => session.are_inside_of(container, container_name),
            CheckKind::Inside {
                container,
                padding: Some(padding),
                ..
            } => session.is_inside_of_with_padding(container, *padding),
            CheckKind::Inside {
                container,
                container_name,
                padding: None,
            } => session.is_inside_of(container, container_name),
            CheckKind::Neighbour {
                other,
                direction,
                margin: Some(margin),
            } => session.has_neighbour(other, *direction, *margin),
            CheckKind::Neighbour {
                other,
                direction,
                margin: None,
            } => session.has_aligned_neighbour(other, *direction),
            CheckKind::Grid { columns, rows } => session.are_aligned_as_grid(*columns, *rows),
        };
        result.map(|_| ())
    }
}

/// A loaded scenario, ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    page: PageSize,
    units: Option<Units>,
    checks: Vec<Check>,
}

impl Scenario {
    /// Load a scenario file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

        let file: ScenarioFile = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse scenario JSON: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse scenario TOML: {}", path.display()))?
        };

        let scenario = Self::from_file(file)
            .with_context(|| format!("Invalid scenario: {}", path.display()))?;
        log::info!(
            "loaded scenario {} with {} check(s)",
            path.display(),
            scenario.checks.len()
        );
        Ok(scenario)
    }

    /// Parse scenario TOML from a string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ScenarioFile = toml::from_str(content).context("Failed to parse scenario TOML")?;
        Self::from_file(file)
    }

    /// Resolve element names and conditions of a parsed file
    pub fn from_file(file: ScenarioFile) -> Result<Self> {
        let page = PageSize::new(file.page.width, file.page.height).context("Invalid page size")?;

        let mut elements = HashMap::new();
        for def in file.elements {
            let name = def.name.clone();
            let element = build_element(def)?;
            if elements.insert(name.clone(), element).is_some() {
                bail!("Element '{}' is defined more than once", name);
            }
        }

        let checks = file
            .checks
            .into_iter()
            .enumerate()
            .map(|(i, def)| {
                resolve_check(def, &elements).with_context(|| format!("Invalid check #{}", i + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Scenario {
            page,
            units: file.units,
            checks,
        })
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Use `units` unless the scenario names its own
    pub fn with_default_units(mut self, units: Units) -> Self {
        self.units.get_or_insert(units);
        self
    }

    /// Run every check in its own session and merge the failures in check order
    pub fn run(&self) -> Result<Verdict> {
        let units = self.units.unwrap_or_default();
        let mut errors = Vec::new();

        for (i, check) in self.checks.iter().enumerate() {
            let mut session = check.session(self.page);
            check
                .apply(&mut session, units)
                .with_context(|| format!("Check #{} could not run", i + 1))?;
            let verdict = session.conclude();
            log::debug!(
                "check #{} ({:?}): {} failure(s)",
                i + 1,
                check.kind,
                verdict.errors.len()
            );
            errors.extend(verdict.errors);
        }

        Ok(Verdict {
            passed: errors.is_empty(),
            errors,
        })
    }
}

fn build_element(def: ElementDef) -> Result<Element> {
    let rectangle = Rectangle::new(def.x, def.y, def.width, def.height)
        .with_context(|| format!("Element '{}' has invalid geometry", def.name))?;
    let mut element = Element::new(rectangle).named(def.name);
    if let Some(tag) = def.tag {
        element = element.with_tag(tag);
    }
    if let Some(id) = def.id {
        element = element.with_id(id);
    }
    if let Some(class) = def.class {
        element = element.with_class(class);
    }
    if let Some(text) = def.text {
        element = element.with_text(text);
    }
    Ok(element)
}

fn lookup(elements: &HashMap<String, Element>, name: &str) -> Result<Element> {
    elements
        .get(name)
        .cloned()
        .with_context(|| format!("Unknown element '{}'", name))
}

fn lookup_all(elements: &HashMap<String, Element>, names: &[String]) -> Result<Vec<Element>> {
    names.iter().map(|name| lookup(elements, name)).collect()
}

fn resolve_check(def: CheckDef, elements: &HashMap<String, Element>) -> Result<Check> {
    let subject = match &def.subject {
        SubjectDef::One(name) => Subject::One(lookup(elements, name)?),
        SubjectDef::Many(names) => Subject::Many(lookup_all(elements, names)?),
    };
    let many = matches!(subject, Subject::Many(_));

    // List subjects are compared among themselves
    let others = |names: &[String]| -> Result<Vec<Element>> {
        if many && !names.is_empty() {
            bail!("'others' only applies to a single subject");
        }
        lookup_all(elements, names)
    };

    let kind = match def.kind {
        CheckKindDef::Aligned { edge, others: names } => CheckKind::Aligned {
            edge,
            others: others(&names)?,
        },
        CheckKindDef::Offset { edge, condition } => CheckKind::Offset {
            edge,
            condition: Condition::try_from(&condition)?,
        },
        CheckKindDef::MinOffset(o) => CheckKind::MinOffset([o.top, o.right, o.bottom, o.left]),
        CheckKindDef::MaxOffset(o) => CheckKind::MaxOffset([o.top, o.right, o.bottom, o.left]),
        CheckKindDef::Centered { axis } => CheckKind::Centered(axis),
        CheckKindDef::SameSize { property, others: names } => CheckKind::SameSize {
            property,
            others: others(&names)?,
        },
        CheckKindDef::DifferentSize { property, others: names } => CheckKind::DifferentSize {
            property,
            others: others(&names)?,
        },
        CheckKindDef::Width { condition } => CheckKind::Width(Condition::try_from(&condition)?),
        CheckKindDef::Height { condition } => CheckKind::Height(Condition::try_from(&condition)?),
        CheckKindDef::MinWidth { value } => CheckKind::MinWidth(value),
        CheckKindDef::MaxWidth { value } => CheckKind::MaxWidth(value),
        CheckKindDef::MinHeight { value } => CheckKind::MinHeight(value),
        CheckKindDef::MaxHeight { value } => CheckKind::MaxHeight(value),
        CheckKindDef::Overlapping { others: names } => CheckKind::Overlapping(others(&names)?),
        CheckKindDef::NotOverlapping { others: names } => {
            CheckKind::NotOverlapping(others(&names)?)
        }
        CheckKindDef::Inside { container, padding } => {
            if many && padding.is_some() {
                bail!("'padding' only applies to a single subject");
            }
            CheckKind::Inside {
                container: lookup(elements, &container)?,
                container_name: container,
                padding,
            }
        }
        CheckKindDef::Neighbour {
            other,
            direction,
            margin,
        } => CheckKind::Neighbour {
            other: lookup(elements, &other)?,
            direction,
            margin: margin.as_ref().map(Condition::try_from).transpose()?,
        },
        CheckKindDef::Grid { columns, rows } => CheckKind::Grid { columns, rows },
    };

    Ok(Check { subject, kind })
}
