//! Element handle collaborator trait.
//!
//! An [`Element`] is a handle to one located element inside the remote
//! browser session. Every method is a single blocking round-trip against the
//! current page state; nothing is cached between calls, so successive
//! round-trips may observe a page that mutated in between.
//!
//! [`MockElement`] provides a canned implementation with a recorded query
//! history, used by this crate's own tests and available to consumers for
//! driver-free testing.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::result::VerifyResult;

/// Pixel size of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ElementSize {
    /// Create a new size
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel position of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementPoint {
    /// X coordinate in pixels
    pub x: i32,
    /// Y coordinate in pixels
    pub y: i32,
}

impl ElementPoint {
    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Handle to one element located within the rendered page
///
/// Collaborator-layer failures (stale references, transport errors) surface
/// as [`crate::VerifyError::Driver`] and propagate through checks unchanged.
pub trait Element {
    /// Tag name, lowercase
    fn tag_name(&self) -> VerifyResult<String>;

    /// Visible inner text
    fn text(&self) -> VerifyResult<String>;

    /// Attribute value by name, `None` if the attribute is absent
    fn attribute(&self, name: &str) -> VerifyResult<Option<String>>;

    /// Computed CSS property value by name
    fn css_value(&self, property: &str) -> VerifyResult<String>;

    /// Whether the element is enabled
    fn is_enabled(&self) -> VerifyResult<bool>;

    /// Whether the element is selected/checked
    fn is_selected(&self) -> VerifyResult<bool>;

    /// Whether the element is visually displayed
    fn is_displayed(&self) -> VerifyResult<bool>;

    /// Rendered pixel size
    fn size(&self) -> VerifyResult<ElementSize>;

    /// Rendered pixel position
    fn location(&self) -> VerifyResult<ElementPoint>;

    /// Descendant elements with the given tag name, in document order
    fn find_by_tag(&self, tag: &str) -> VerifyResult<Vec<Self>>
    where
        Self: Sized;
}

/// Mock element for unit testing
///
/// Built up with canned state; records every attribute and CSS query so
/// tests can verify exactly which round-trips a check issued. The query log
/// is shared across clones and children.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    tag: String,
    text: String,
    attributes: BTreeMap<String, String>,
    css: BTreeMap<String, String>,
    enabled: bool,
    selected: bool,
    displayed: bool,
    size: Option<ElementSize>,
    location: Option<ElementPoint>,
    children: Vec<MockElement>,
    queries: Rc<RefCell<Vec<String>>>,
}

impl MockElement {
    /// Create a mock element with the given tag name
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            enabled: true,
            displayed: true,
            ..Self::default()
        }
    }

    /// Set the visible text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a CSS property value
    #[must_use]
    pub fn with_css(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.css.insert(property.into(), value.into());
        self
    }

    /// Set enabled state
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set selected state
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set displayed state
    #[must_use]
    pub fn displayed(mut self, displayed: bool) -> Self {
        self.displayed = displayed;
        self
    }

    /// Set rendered size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some(ElementSize::new(width, height));
        self
    }

    /// Set rendered position
    #[must_use]
    pub fn with_location(mut self, x: i32, y: i32) -> Self {
        self.location = Some(ElementPoint::new(x, y));
        self
    }

    /// Append a child element (the whole subtree shares this element's
    /// query log)
    #[must_use]
    pub fn with_child(mut self, mut child: MockElement) -> Self {
        child.adopt(&self.queries);
        self.children.push(child);
        self
    }

    /// Queries issued so far, in order
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    /// Whether a query with the given label was issued
    #[must_use]
    pub fn was_queried(&self, label: &str) -> bool {
        self.queries.borrow().iter().any(|q| q == label)
    }

    fn record(&self, label: String) {
        self.queries.borrow_mut().push(label);
    }

    fn adopt(&mut self, log: &Rc<RefCell<Vec<String>>>) {
        self.queries = Rc::clone(log);
        for child in &mut self.children {
            child.adopt(log);
        }
    }

    fn collect_by_tag(&self, tag: &str, out: &mut Vec<MockElement>) {
        for child in &self.children {
            if child.tag == tag {
                out.push(child.clone());
            }
            child.collect_by_tag(tag, out);
        }
    }
}

impl Element for MockElement {
    fn tag_name(&self) -> VerifyResult<String> {
        Ok(self.tag.clone())
    }

    fn text(&self) -> VerifyResult<String> {
        Ok(self.text.clone())
    }

    fn attribute(&self, name: &str) -> VerifyResult<Option<String>> {
        self.record(format!("attr:{name}"));
        Ok(self.attributes.get(name).cloned())
    }

    fn css_value(&self, property: &str) -> VerifyResult<String> {
        self.record(format!("css:{property}"));
        Ok(self.css.get(property).cloned().unwrap_or_default())
    }

    fn is_enabled(&self) -> VerifyResult<bool> {
        Ok(self.enabled)
    }

    fn is_selected(&self) -> VerifyResult<bool> {
        Ok(self.selected)
    }

    fn is_displayed(&self) -> VerifyResult<bool> {
        Ok(self.displayed)
    }

    fn size(&self) -> VerifyResult<ElementSize> {
        Ok(self.size.unwrap_or(ElementSize::new(0, 0)))
    }

    fn location(&self) -> VerifyResult<ElementPoint> {
        Ok(self.location.unwrap_or(ElementPoint::new(0, 0)))
    }

    fn find_by_tag(&self, tag: &str) -> VerifyResult<Vec<Self>> {
        let mut out = Vec::new();
        self.collect_by_tag(tag, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_element_builder() {
        let elem = MockElement::new("input")
            .with_attribute("type", "text")
            .with_text("hello");
        assert_eq!(elem.tag_name().unwrap(), "input");
        assert_eq!(elem.text().unwrap(), "hello");
        assert_eq!(
            elem.attribute("type").unwrap(),
            Some("text".to_string())
        );
        assert_eq!(elem.attribute("name").unwrap(), None);
    }

    #[test]
    fn test_missing_css_value_is_empty_string() {
        let elem = MockElement::new("div");
        assert_eq!(elem.css_value("border-color").unwrap(), "");
    }

    #[test]
    fn test_query_log_records_in_order() {
        let elem = MockElement::new("div").with_css("color", "red");
        let _ = elem.css_value("color");
        let _ = elem.attribute("id");
        assert_eq!(elem.queries(), vec!["css:color", "attr:id"]);
        assert!(elem.was_queried("css:color"));
        assert!(!elem.was_queried("css:width"));
    }

    #[test]
    fn test_find_by_tag_is_document_order() {
        let container = MockElement::new("ul")
            .with_child(MockElement::new("li").with_text("one"))
            .with_child(
                MockElement::new("li")
                    .with_text("two")
                    .with_child(MockElement::new("li").with_text("nested")),
            )
            .with_child(MockElement::new("span").with_text("not an item"));

        let items = container.find_by_tag("li").unwrap();
        let texts: Vec<String> = items.iter().map(|e| e.text().unwrap()).collect();
        assert_eq!(texts, vec!["one", "two", "nested"]);
    }

    #[test]
    fn test_children_share_query_log() {
        let container =
            MockElement::new("select").with_child(MockElement::new("option").with_text("a"));
        let options = container.find_by_tag("option").unwrap();
        let _ = options[0].attribute("value");
        assert!(container.was_queried("attr:value"));
    }
}
