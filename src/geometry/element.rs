//! Elements: a rectangle plus whatever the geometry provider knows about it

use serde::Serialize;

use super::rectangle::Rectangle;

const MAX_TEXT_IN_LABEL: usize = 10;

/// A measured on-screen element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    rectangle: Rectangle,
    name: Option<String>,
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
    text: Option<String>,
}

impl Element {
    pub fn new(rectangle: Rectangle) -> Self {
        Self {
            rectangle,
            ..Self::default()
        }
    }

    /// Attach the readable name used in messages
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Readable name, or the property description when the element has none
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.describe_properties(),
        }
    }

    /// Description built from the provider's properties and the geometry
    pub fn describe_properties(&self) -> String {
        let text = self.text.as_deref().unwrap_or("");
        let text = if text.chars().count() < MAX_TEXT_IN_LABEL {
            text.to_string()
        } else {
            let head: String = text.chars().take(MAX_TEXT_IN_LABEL).collect();
            format!("{}...", head)
        };
        let r = &self.rectangle;
        format!(
            "with properties: tag=[{}], id=[{}], class=[{}], text=[{}], coord=[{},{}], size=[{},{}]",
            self.tag.as_deref().unwrap_or("null"),
            self.id.as_deref().unwrap_or("null"),
            self.class.as_deref().unwrap_or("null"),
            text,
            r.x(),
            r.y(),
            r.width(),
            r.height()
        )
    }

    /// Position-in-list label, e.g. `#1:[(100,200) - 400x200]`
    pub fn indexed_label(&self, index: usize) -> String {
        let r = &self.rectangle;
        format!(
            "#{}:[({},{}) - {}x{}]",
            index + 1,
            r.x(),
            r.y(),
            r.width(),
            r.height()
        )
    }

    /// Frozen copy of the geometry and label for error reporting
    pub fn snapshot(&self) -> ElementSnapshot {
        ElementSnapshot {
            label: self.label(),
            rectangle: self.rectangle,
        }
    }
}

/// Geometry and label captured when a failure is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSnapshot {
    pub label: String,
    pub rectangle: Rectangle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(x: i32, y: i32, w: i32, h: i32) -> Element {
        Element::new(Rectangle::new(x, y, w, h).unwrap())
    }

    #[test]
    fn test_label_prefers_name() {
        let e = element(100, 200, 400, 200).named("under test");
        assert_eq!(e.label(), "under test");
    }

    #[test]
    fn test_unnamed_label_describes_properties() {
        let e = element(105, 200, 395, 200);
        assert_eq!(
            e.label(),
            "with properties: tag=[null], id=[null], class=[null], text=[], coord=[105,200], size=[395,200]"
        );
    }

    #[test]
    fn test_long_text_is_truncated() {
        let e = element(0, 0, 1, 1)
            .with_tag("div")
            .with_id("main")
            .with_class("card")
            .with_text("Hello wonderful world");
        assert_eq!(
            e.describe_properties(),
            "with properties: tag=[div], id=[main], class=[card], text=[Hello wond...], coord=[0,0], size=[1,1]"
        );
    }

    #[test]
    fn test_indexed_label() {
        let e = element(100, 200, 400, 200);
        assert_eq!(e.indexed_label(0), "#1:[(100,200) - 400x200]");
    }
}
