//! The assertion surface: named, independent checks.
//!
//! Each check is a thin composition over the normalization layers: issue the
//! round-trips, normalize the raw responses, compare against the supplied
//! expectation, and either return `Ok(())` or fail with a structured
//! [`VerifyError`] carrying enough context to diagnose without re-running
//! the test.
//!
//! Checks are stateless free functions taking their collaborators as
//! parameters. Every check is fail-fast and evaluated once, synchronously,
//! against current page state; there are no retries and no soft failures.
//! Composite checks evaluate their members in the order the expected items
//! are supplied and fail on the first violated member.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::color::Rgba;
use crate::css::{self, CssPosition};
use crate::driver::Driver;
use crate::element::Element;
use crate::image;
use crate::listing;
use crate::locator::Locator;
use crate::menu::Menu;
use crate::result::{VerifyError, VerifyResult};
use crate::role::{self, ElementRole};

// ---------------------------------------------------------------------------
// Page-level checks
// ---------------------------------------------------------------------------

/// Check that the page title equals the expected title
pub fn title_equals<D: Driver>(driver: &D, expected: &str) -> VerifyResult<()> {
    let actual = driver.title()?;
    debug!(expected, actual = %actual, "title check");
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::ValueMismatch {
            check: "page title".to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check that the current URL equals the expected URL
pub fn url_equals<D: Driver>(driver: &D, expected: &str) -> VerifyResult<()> {
    let actual = driver.current_url()?;
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::ValueMismatch {
            check: "page url".to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check that navigating to a URL completes within the time budget
///
/// Measures wall-clock time around one blocking navigation call. There is
/// no cancellation: if the navigation itself never returns, neither does
/// this check. The failure carries the measured elapsed milliseconds.
pub fn response_time_within<D: Driver>(
    driver: &mut D,
    url: &str,
    budget: Duration,
) -> VerifyResult<()> {
    let start = Instant::now();
    driver.navigate(url)?;
    let elapsed = start.elapsed();
    debug!(url, elapsed_ms = elapsed.as_millis() as u64, "response time check");
    if elapsed < budget {
        Ok(())
    } else {
        Err(VerifyError::ResponseTimeExceeded {
            url: url.to_string(),
            elapsed_ms: elapsed.as_millis() as u64,
            budget_ms: budget.as_millis() as u64,
        })
    }
}

/// Check that a named cookie is set
pub fn cookie_present<D: Driver>(driver: &D, name: &str) -> VerifyResult<()> {
    if driver.cookie(name)?.is_some() {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "cookie present".to_string(),
            message: format!("cookie {name:?} is not set"),
        })
    }
}

/// Check that an element exists for the locator
///
/// The driver's [`VerifyError::ElementNotFound`] propagates unchanged.
pub fn element_exists<D: Driver>(driver: &D, locator: &Locator) -> VerifyResult<()> {
    driver.find_element(locator).map(|_| ())
}

/// Check that an alert is currently active
pub fn alert_present<D: Driver>(driver: &mut D) -> VerifyResult<()> {
    driver.switch_to_alert()
}

/// Check that the expected text is present anywhere in the page body
pub fn page_contains_text<D: Driver>(driver: &D, expected: &str) -> VerifyResult<()> {
    let body = driver.find_element(&Locator::tag("body"))?;
    text_contains(&body, expected)
}

/// Check that a label is bound to the form input with the given id
pub fn label_present<D: Driver>(driver: &D, input_id: &str) -> VerifyResult<()> {
    element_exists(driver, &Locator::label_for(input_id))
}

// ---------------------------------------------------------------------------
// Element text / attribute / state checks
// ---------------------------------------------------------------------------

/// Check that an element's inner text equals the expected string
pub fn text_equals<E: Element>(element: &E, expected: &str) -> VerifyResult<()> {
    let actual = element.text()?;
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::ValueMismatch {
            check: "element text".to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check that an element's inner text contains the expected string
pub fn text_contains<E: Element>(element: &E, expected: &str) -> VerifyResult<()> {
    let actual = element.text()?;
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "text contains".to_string(),
            message: format!("element text {actual:?} doesn't contain {expected:?}"),
        })
    }
}

/// Check that an attribute is present on the element
pub fn attribute_present<E: Element>(element: &E, name: &str) -> VerifyResult<()> {
    if element.attribute(name)?.is_some() {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "attribute present".to_string(),
            message: format!("attribute {name:?} is not found in element"),
        })
    }
}

/// Check that an attribute equals the expected value
pub fn attribute_equals<E: Element>(element: &E, name: &str, expected: &str) -> VerifyResult<()> {
    attribute_present(element, name)?;
    let actual = element.attribute(name)?.unwrap_or_default();
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::PropertyMismatch {
            property: name.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check the element's `value` attribute
pub fn value_equals<E: Element>(element: &E, expected: &str) -> VerifyResult<()> {
    attribute_equals(element, "value", expected)
}

/// Check that a form element is enabled
pub fn enabled<E: Element>(element: &E) -> VerifyResult<()> {
    if element.is_enabled()? {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "enabled".to_string(),
            message: "element is not enabled".to_string(),
        })
    }
}

/// Check that a form element is disabled
pub fn disabled<E: Element>(element: &E) -> VerifyResult<()> {
    if element.is_enabled()? {
        Err(VerifyError::ConditionFailed {
            check: "disabled".to_string(),
            message: "element is enabled".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Check that an element is selected
pub fn selected<E: Element>(element: &E) -> VerifyResult<()> {
    if element.is_selected()? {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "selected".to_string(),
            message: "element is not selected".to_string(),
        })
    }
}

/// Check that an element is visible
pub fn visible<E: Element>(element: &E) -> VerifyResult<()> {
    if element.is_displayed()? {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "visible".to_string(),
            message: "element is not visible".to_string(),
        })
    }
}

/// Check the element's tag name
pub fn tag_name_equals<E: Element>(element: &E, expected: &str) -> VerifyResult<()> {
    let actual = element.tag_name()?;
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::ValueMismatch {
            check: "tag name".to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check the element's rendered pixel size
pub fn size_equals<E: Element>(element: &E, width: u32, height: u32) -> VerifyResult<()> {
    let actual = element.size()?;
    if actual.width == width && actual.height == height {
        Ok(())
    } else {
        Err(VerifyError::ValueMismatch {
            check: "element size".to_string(),
            expected: format!("{width}x{height}"),
            actual: format!("{}x{}", actual.width, actual.height),
        })
    }
}

/// Check the element's rendered pixel position
pub fn location_equals<E: Element>(element: &E, x: i32, y: i32) -> VerifyResult<()> {
    let actual = element.location()?;
    if actual.x == x && actual.y == y {
        Ok(())
    } else {
        Err(VerifyError::ValueMismatch {
            check: "element location".to_string(),
            expected: format!("({x}, {y})"),
            actual: format!("({}, {})", actual.x, actual.y),
        })
    }
}

// ---------------------------------------------------------------------------
// CSS checks
// ---------------------------------------------------------------------------

/// Check a raw CSS property value, byte for byte
///
/// No normalization is applied; for color-valued properties prefer
/// [`css_color_equals`], which compares canonical values across engines.
pub fn css_value_equals<E: Element>(
    element: &E,
    property: &str,
    expected: &str,
) -> VerifyResult<()> {
    let actual = element.css_value(property)?;
    if actual == expected {
        Ok(())
    } else {
        Err(VerifyError::PropertyMismatch {
            property: property.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check the color value of any color-valued CSS property
pub fn css_color_equals<E: Element>(
    element: &E,
    property: &str,
    expected: Rgba,
) -> VerifyResult<()> {
    css::check_css_color(element, property, expected)
}

/// Check the CSS `color` property
pub fn color_equals<E: Element>(element: &E, expected: Rgba) -> VerifyResult<()> {
    css::check_css_color(element, "color", expected)
}

/// Check the CSS `background-color` property
pub fn background_color_equals<E: Element>(element: &E, expected: Rgba) -> VerifyResult<()> {
    css::check_css_color(element, "background-color", expected)
}

/// Check the border color, with the per-side fallback protocol
pub fn border_color_equals<E: Element>(element: &E, expected: Rgba) -> VerifyResult<()> {
    css::check_border_color(element, expected)
}

/// Check the border color of a single side of the family
pub fn border_color_equals_at<E: Element>(
    element: &E,
    expected: Rgba,
    position: CssPosition,
) -> VerifyResult<()> {
    css::check_border_color_at(element, expected, position)
}

// ---------------------------------------------------------------------------
// Role checks
// ---------------------------------------------------------------------------

/// Check that the element is a button
pub fn is_button<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::Button)
}

/// Check that the element is a checkbox
pub fn is_checkbox<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::Checkbox)
}

/// Check that the element is a checkbox and is checked
pub fn checkbox_checked<E: Element>(element: &E) -> VerifyResult<()> {
    is_checkbox(element)?;
    selected(element)
}

/// Check that the element is a radio button
pub fn is_radio<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::Radio)
}

/// Check that the element is a link
pub fn is_link<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::Link)
}

/// Check that the element is a link pointing at the expected URL
pub fn link_url_equals<E: Element>(element: &E, expected: &str) -> VerifyResult<()> {
    is_link(element)?;
    attribute_equals(element, "href", expected)
}

/// Check that the element is an image
pub fn is_image<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::Image)
}

/// Check that the element is a text input
pub fn is_text_input<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::TextInput)
}

/// Check that the element is a hidden input
pub fn is_hidden_input<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::HiddenInput)
}

/// Check that the element is a password field
pub fn is_password_field<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::PasswordField)
}

/// Check that the element is a text area
pub fn is_text_area<E: Element>(element: &E) -> VerifyResult<()> {
    role::require_role(element, ElementRole::TextArea)
}

/// Check that the element can be adapted as a menu
pub fn is_menu<E: Element>(element: &E) -> VerifyResult<()> {
    Menu::new(element).map(|_| ())
}

// ---------------------------------------------------------------------------
// Menu checks
// ---------------------------------------------------------------------------

/// Check that an option with the given displayed text is currently selected
///
/// Supports multi-select menus: the option only needs to appear among the
/// selected options, not be the sole selection.
pub fn menu_option_selected<E: Element>(element: &E, option: &str) -> VerifyResult<()> {
    let menu = Menu::new(element)?;
    let selected = menu.selected_texts()?;
    debug!(option, ?selected, "menu selection check");
    if selected.iter().any(|t| t == option) {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "menu option selected".to_string(),
            message: format!("expected option isn't selected: {option}"),
        })
    }
}

/// Check that every listed option is currently selected, in supplied order
pub fn menu_options_selected<E: Element>(element: &E, options: &[&str]) -> VerifyResult<()> {
    for option in options {
        menu_option_selected(element, option)?;
    }
    Ok(())
}

/// Check that the menu contains an option with the given displayed text
///
/// Independent of selection state: an unselected option still counts.
pub fn menu_contains_option<E: Element>(element: &E, option: &str) -> VerifyResult<()> {
    let menu = Menu::new(element)?;
    let all = menu.option_texts()?;
    if all.iter().any(|t| t == option) {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "menu contains option".to_string(),
            message: format!("expected option isn't found: {option}"),
        })
    }
}

/// Check that the menu contains every expected option, in supplied order
pub fn menu_options_equal<E: Element>(element: &E, options: &[&str]) -> VerifyResult<()> {
    for option in options {
        menu_contains_option(element, option)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// List and image checks
// ---------------------------------------------------------------------------

/// Check that the `<li>` descendants of an element match the expected texts
///
/// Strict ordered equality: same count, same values, same order.
pub fn list_items_equal<E: Element>(element: &E, expected: &[&str]) -> VerifyResult<()> {
    let actual = listing::extract_ordered_texts(element, "li")?;
    listing::compare_sequences(&actual, expected)
}

/// Check that an image element has loaded and is visually rendered
pub fn image_visible<D: Driver>(driver: &D, element: &D::Elem) -> VerifyResult<()> {
    if image::is_image_visible(driver, element)? {
        Ok(())
    } else {
        Err(VerifyError::ConditionFailed {
            check: "image visible".to_string(),
            message: "image is not visible".to_string(),
        })
    }
}
