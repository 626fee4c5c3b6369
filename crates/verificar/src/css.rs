//! CSS property inspection and color-valued property checks.
//!
//! Color-valued properties come back from the engine in whatever shape it
//! prefers; everything here funnels through [`Rgba::parse`] before
//! comparison.
//!
//! The border-color family needs a fallback protocol: some engines return an
//! empty string for the aggregate `border-color` shorthand when no single
//! color can be synthesized from the four sides. When that happens the check
//! queries and validates each per-side property independently.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgba;
use crate::element::Element;
use crate::result::{VerifyError, VerifyResult};

/// Directional position within a CSS property family
///
/// `Aggregate` names the single shorthand property covering all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CssPosition {
    /// Top side
    Top,
    /// Bottom side
    Bottom,
    /// Right side
    Right,
    /// Left side
    Left,
    /// The aggregate shorthand property
    Aggregate,
}

impl CssPosition {
    /// The four directional positions, in fallback query order
    pub const SIDES: [Self; 4] = [Self::Top, Self::Bottom, Self::Right, Self::Left];

    /// Border-color property name for this position
    #[must_use]
    pub const fn border_color_property(self) -> &'static str {
        match self {
            Self::Top => "border-top-color",
            Self::Bottom => "border-bottom-color",
            Self::Right => "border-right-color",
            Self::Left => "border-left-color",
            Self::Aggregate => "border-color",
        }
    }
}

/// Check that a color-valued CSS property equals the expected color
///
/// Applies to any property whose value parses as a color. The comparison is
/// against the canonical [`Rgba`] value, so the engine's representation
/// (hex, functional, named) does not matter.
///
/// # Errors
///
/// [`VerifyError::UnparsableColor`] when the reported value matches no color
/// grammar; [`VerifyError::PropertyMismatch`] when the colors differ.
pub fn check_css_color<E: Element>(
    element: &E,
    property: &str,
    expected: Rgba,
) -> VerifyResult<()> {
    let raw = element.css_value(property)?;
    debug!(property, value = %raw, "css color check");
    let actual = Rgba::parse(&raw)?;
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::PropertyMismatch {
            property: property.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Check the border color, falling back to per-side properties
///
/// Queries the aggregate `border-color` first. If the engine reports a
/// non-empty value, only the aggregate is validated. If the engine reports
/// the empty string, all four per-side properties are queried and each must
/// equal the expected color.
pub fn check_border_color<E: Element>(element: &E, expected: Rgba) -> VerifyResult<()> {
    let aggregate = element.css_value(CssPosition::Aggregate.border_color_property())?;
    if aggregate.is_empty() {
        debug!("aggregate border-color empty, falling back to per-side properties");
        for side in CssPosition::SIDES {
            check_css_color(element, side.border_color_property(), expected)?;
        }
        Ok(())
    } else {
        let actual = Rgba::parse(&aggregate)?;
        if actual == expected {
            Ok(())
        } else {
            Err(VerifyError::PropertyMismatch {
                property: "border-color".to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            })
        }
    }
}

/// Check the border color of one position of the family
pub fn check_border_color_at<E: Element>(
    element: &E,
    expected: Rgba,
    position: CssPosition,
) -> VerifyResult<()> {
    check_css_color(element, position.border_color_property(), expected)
}
