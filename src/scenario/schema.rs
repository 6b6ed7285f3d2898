//! Scenario Schema Types
//!
//! Serde shapes of a scenario file. These stay close to the file format;
//! [`super::Scenario`] holds the resolved runtime form.

use serde::Deserialize;

use crate::condition::{Axis, Condition, Units, Value};
use crate::validation::{Direction, Edge, Padding, SizeProperty};

/// Root scenario file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub page: PageDef,
    pub units: Option<Units>,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
    #[serde(default)]
    pub checks: Vec<CheckDef>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct PageDef {
    pub width: i32,
    pub height: i32,
}

/// A measured element, referenced by name from checks
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ElementDef {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub tag: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub text: Option<String>,
}

/// One name for subject checks, a list of names for list checks
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SubjectDef {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckDef {
    pub subject: SubjectDef,
    #[serde(flatten)]
    pub kind: CheckKindDef,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKindDef {
    /// Shared edge offset: with `others` for a single subject, pairwise for a list
    Aligned {
        edge: Edge,
        #[serde(default)]
        others: Vec<String>,
    },
    Offset {
        edge: Edge,
        condition: ConditionDef,
    },
    MinOffset(OffsetsDef),
    MaxOffset(OffsetsDef),
    Centered {
        axis: Axis,
    },
    SameSize {
        property: SizeProperty,
        #[serde(default)]
        others: Vec<String>,
    },
    DifferentSize {
        property: SizeProperty,
        #[serde(default)]
        others: Vec<String>,
    },
    Width {
        condition: ConditionDef,
    },
    Height {
        condition: ConditionDef,
    },
    MinWidth {
        value: i32,
    },
    MaxWidth {
        value: i32,
    },
    MinHeight {
        value: i32,
    },
    MaxHeight {
        value: i32,
    },
    Overlapping {
        #[serde(default)]
        others: Vec<String>,
    },
    NotOverlapping {
        #[serde(default)]
        others: Vec<String>,
    },
    Inside {
        container: String,
        padding: Option<Padding>,
    },
    /// `other` sits on the `direction` side; no margin means stacked alignment
    Neighbour {
        other: String,
        direction: Direction,
        margin: Option<ConditionDef>,
    },
    Grid {
        #[serde(default)]
        columns: usize,
        #[serde(default)]
        rows: usize,
    },
}

/// Offset bounds in the scenario's units
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct OffsetsDef {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

/// `{ exact = 400 }`, `{ at_least = "50%" }`, `{ between = [10, "20%"] }`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ConditionDef {
    Exact(ValueDef),
    AtLeast(ValueDef),
    AtMost(ValueDef),
    Between([ValueDef; 2]),
}

/// A bound: plain integer pixels, or text such as `"12px"`, `"50%"`, `"50%w"`, `"50%h"`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValueDef {
    Pixels(i32),
    Text(String),
}

impl TryFrom<&ValueDef> for Value {
    type Error = anyhow::Error;

    fn try_from(def: &ValueDef) -> Result<Self, Self::Error> {
        let text = match def {
            ValueDef::Pixels(pixels) => return Ok(Value::px(*pixels)),
            ValueDef::Text(text) => text.trim(),
        };
        let parse = |digits: &str| {
            digits
                .trim()
                .parse::<i32>()
                .map_err(|_| anyhow::anyhow!("Invalid value '{}'", text))
        };
        if let Some(percent) = text.strip_suffix("%w") {
            Ok(Value::percent_of(parse(percent)?, Axis::Horizontal))
        } else if let Some(percent) = text.strip_suffix("%h") {
            Ok(Value::percent_of(parse(percent)?, Axis::Vertical))
        } else if let Some(percent) = text.strip_suffix('%') {
            Ok(Value::percent(parse(percent)?))
        } else {
            Ok(Value::px(parse(text.strip_suffix("px").unwrap_or(text))?))
        }
    }
}

impl TryFrom<&ConditionDef> for Condition {
    type Error = anyhow::Error;

    fn try_from(def: &ConditionDef) -> Result<Self, Self::Error> {
        Ok(match def {
            ConditionDef::Exact(value) => Condition::exact(Value::try_from(value)?),
            ConditionDef::AtLeast(value) => Condition::greater_or_equal_to(Value::try_from(value)?),
            ConditionDef::AtMost(value) => Condition::less_or_equal_to(Value::try_from(value)?),
            ConditionDef::Between([lower, upper]) => {
                Condition::between(Value::try_from(lower)?, Value::try_from(upper)?)?
            }
        })
    }
}
