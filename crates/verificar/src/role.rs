//! Semantic element role classification.
//!
//! Maps a raw element (tag name plus, where ambiguous, the `type` attribute)
//! onto a closed set of semantic roles. Classification is deterministic: the
//! same tag/type pair always yields the same role.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::result::{VerifyError, VerifyResult};

/// Semantic role of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementRole {
    /// `<button>`
    Button,
    /// `<input type="checkbox">`
    Checkbox,
    /// `<input type="radio">`
    Radio,
    /// `<a>`
    Link,
    /// `<img>`
    Image,
    /// `<input type="text">`
    TextInput,
    /// `<input type="hidden">`
    HiddenInput,
    /// `<input type="password">`
    PasswordField,
    /// `<textarea>`
    TextArea,
    /// `<select>`
    Menu,
}

impl ElementRole {
    /// Expected tag name for this role
    #[must_use]
    pub const fn expected_tag(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "a",
            Self::Image => "img",
            Self::TextArea => "textarea",
            Self::Menu => "select",
            Self::Checkbox | Self::Radio | Self::TextInput | Self::HiddenInput
            | Self::PasswordField => "input",
        }
    }

    /// Expected `type` attribute for this role, `None` when any type matches
    #[must_use]
    pub const fn expected_type(self) -> Option<&'static str> {
        match self {
            Self::Checkbox => Some("checkbox"),
            Self::Radio => Some("radio"),
            Self::TextInput => Some("text"),
            Self::HiddenInput => Some("hidden"),
            Self::PasswordField => Some("password"),
            _ => None,
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Link => "link",
            Self::Image => "image",
            Self::TextInput => "text input",
            Self::HiddenInput => "hidden input",
            Self::PasswordField => "password field",
            Self::TextArea => "text area",
            Self::Menu => "menu",
        };
        write!(f, "{name}")
    }
}

/// Classify an element onto its semantic role
///
/// Decision table: `<input>` branches on the `type` attribute; `button`,
/// `a`, `img`, `textarea`, and `select` classify by tag alone.
///
/// # Errors
///
/// Returns [`VerifyError::UnrecognizedRole`] when no known tag/type
/// combination matches.
pub fn classify<E: Element>(element: &E) -> VerifyResult<ElementRole> {
    let tag = element.tag_name()?;
    match tag.as_str() {
        "button" => return Ok(ElementRole::Button),
        "a" => return Ok(ElementRole::Link),
        "img" => return Ok(ElementRole::Image),
        "textarea" => return Ok(ElementRole::TextArea),
        "select" => return Ok(ElementRole::Menu),
        _ => {}
    }

    let type_attr = element.attribute("type")?;
    if tag == "input" {
        match type_attr.as_deref() {
            Some("text") => return Ok(ElementRole::TextInput),
            Some("hidden") => return Ok(ElementRole::HiddenInput),
            Some("checkbox") => return Ok(ElementRole::Checkbox),
            Some("radio") => return Ok(ElementRole::Radio),
            Some("password") => return Ok(ElementRole::PasswordField),
            _ => {}
        }
    }

    Err(VerifyError::UnrecognizedRole { tag, type_attr })
}

/// Require an element to have a specific role
///
/// Unlike [`classify`], the failure names which expectation was violated:
/// the tag name or the `type` attribute.
///
/// # Errors
///
/// Returns [`VerifyError::RoleMismatch`] identifying the violated
/// expectation.
pub fn require_role<E: Element>(element: &E, role: ElementRole) -> VerifyResult<()> {
    let tag = element.tag_name()?;
    if tag != role.expected_tag() {
        return Err(VerifyError::RoleMismatch {
            role: role.to_string(),
            detail: format!("tag is {tag:?}, expected {:?}", role.expected_tag()),
        });
    }

    if let Some(expected_type) = role.expected_type() {
        let type_attr = element.attribute("type")?;
        if type_attr.as_deref() != Some(expected_type) {
            return Err(VerifyError::RoleMismatch {
                role: role.to_string(),
                detail: format!(
                    "type attribute is {type_attr:?}, expected {expected_type:?}"
                ),
            });
        }
    }

    Ok(())
}
