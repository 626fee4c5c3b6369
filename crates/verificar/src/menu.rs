//! Selection widget adapter.
//!
//! Wraps a `<select>` element and exposes its options. Option identity for
//! verification purposes is the displayed text, never the underlying `value`
//! attribute: two options with different values but identical text are
//! indistinguishable to this layer.
//!
//! Snapshots are taken fresh on every call. The underlying page can mutate
//! between calls, so nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::result::{VerifyError, VerifyResult};

/// One option of a selection widget, as observed at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    /// Displayed text
    pub text: String,
    /// Whether the option is currently selected
    pub selected: bool,
}

/// Ordered observation of a menu's options
///
/// Owned transiently by a single adapter call; never retained across calls.
pub type MenuSnapshot = Vec<MenuOption>;

/// Adapter over a menu-like element
#[derive(Debug)]
pub struct Menu<'a, E: Element> {
    element: &'a E,
}

impl<'a, E: Element> Menu<'a, E> {
    /// Adapt an element as a selection widget
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::NotAMenu`] unless the element is a `<select>`.
    pub fn new(element: &'a E) -> VerifyResult<Self> {
        let tag = element.tag_name()?;
        if tag == "select" {
            Ok(Self { element })
        } else {
            Err(VerifyError::NotAMenu { tag })
        }
    }

    /// Take a fresh snapshot of all options, in document order
    pub fn snapshot(&self) -> VerifyResult<MenuSnapshot> {
        let mut options = Vec::new();
        for option in self.element.find_by_tag("option")? {
            options.push(MenuOption {
                text: option.text()?,
                selected: option.is_selected()?,
            });
        }
        Ok(options)
    }

    /// Displayed texts of all options, regardless of selection state
    pub fn option_texts(&self) -> VerifyResult<Vec<String>> {
        Ok(self.snapshot()?.into_iter().map(|o| o.text).collect())
    }

    /// Displayed texts of the currently selected options
    ///
    /// Multi-select menus may report more than one.
    pub fn selected_texts(&self) -> VerifyResult<Vec<String>> {
        Ok(self
            .snapshot()?
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.text)
            .collect())
    }
}
