//! Error Aggregator
//!
//! Ordered, append-only record of validation failures for one session.

use serde::Serialize;

use crate::geometry::{Element, ElementSnapshot};

/// One recorded validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<ElementSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ElementSnapshot>,
}

/// Failures recorded so far, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors {
    records: Vec<ErrorRecord>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure that points at no particular element
    pub fn add(&mut self, message: String) {
        self.push(message, None, None);
    }

    /// Record a failure highlighting one element
    pub fn add_for(&mut self, message: String, element: &Element) {
        self.push(message, Some(element.snapshot()), None);
    }

    /// Record a failure highlighting two elements
    pub fn add_for_pair(&mut self, message: String, primary: &Element, secondary: &Element) {
        self.push(
            message,
            Some(primary.snapshot()),
            Some(secondary.snapshot()),
        );
    }

    fn push(
        &mut self,
        message: String,
        primary: Option<ElementSnapshot>,
        secondary: Option<ElementSnapshot>,
    ) {
        log::debug!("validation failure: {}", message);
        self.records.push(ErrorRecord {
            message,
            primary,
            secondary,
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Most recent failure message
    pub fn last_message(&self) -> Option<&str> {
        self.records.last().map(|r| r.message.as_str())
    }

    pub fn into_records(self) -> Vec<ErrorRecord> {
        self.records
    }
}
