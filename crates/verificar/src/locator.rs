//! Locator expressions for element lookup.
//!
//! A [`Locator`] identifies zero or more elements within a rendered page. The
//! lookup itself is the driver collaborator's job; this layer only carries
//! the expression through to [`crate::driver::Driver::find_element`] and
//! reports it back in failure messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strategy-tagged locator expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// XPath expression
    XPath(String),
    /// Element id attribute
    Id(String),
    /// Tag name
    Tag(String),
    /// Exact visible text of a link
    LinkText(String),
}

impl Locator {
    /// Create a CSS selector locator
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath locator
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// Create an id locator
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Create a tag-name locator
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Create a link-text locator
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Locator for the label bound to a form input, by input id
    #[must_use]
    pub fn label_for(input_id: &str) -> Self {
        Self::XPath(format!("//label[@for='{input_id}']"))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css:{s}"),
            Self::XPath(s) => write!(f, "xpath:{s}"),
            Self::Id(s) => write!(f, "id:{s}"),
            Self::Tag(s) => write!(f, "tag:{s}"),
            Self::LinkText(s) => write!(f, "link-text:{s}"),
        }
    }
}
