//! Rendered-image load detection.
//!
//! An `<img>` element can exist in the DOM without being visually rendered:
//! the link may be broken or the resource still pending. Detection is a
//! script probe against the element, and the script differs by engine. The
//! choice is a strategy lookup on [`EngineQuirk`] so that a new engine only
//! touches the table here, never the checks.

use tracing::debug;

use crate::driver::{Driver, EngineQuirk};
use crate::element::Element;
use crate::result::{VerifyError, VerifyResult};
use crate::role::{classify, ElementRole};

/// Script probing the `complete` readiness flag (Trident family)
const COMPLETE_FLAG_SCRIPT: &str = "return arguments[0].complete";

/// Script probing the natural pixel width (all other engines)
const NATURAL_WIDTH_SCRIPT: &str =
    "return (typeof arguments[0].naturalWidth != \"undefined\" && arguments[0].naturalWidth > 0)";

/// Detection script for the given engine quirk
#[must_use]
pub const fn detection_script(engine: EngineQuirk) -> &'static str {
    match engine {
        EngineQuirk::Trident => COMPLETE_FLAG_SCRIPT,
        EngineQuirk::Gecko | EngineQuirk::Blink | EngineQuirk::WebKit | EngineQuirk::Unknown => {
            NATURAL_WIDTH_SCRIPT
        }
    }
}

/// Determine whether an image element has loaded and is visually rendered
///
/// # Errors
///
/// [`VerifyError::NotAnImage`] unless the element classifies as an image;
/// [`VerifyError::ScriptExecutionUnsupported`] when the driver lacks the
/// script capability.
pub fn is_image_visible<D: Driver>(driver: &D, element: &D::Elem) -> VerifyResult<bool> {
    match classify(element) {
        Ok(ElementRole::Image) => {}
        Ok(_) | Err(VerifyError::UnrecognizedRole { .. }) => {
            return Err(VerifyError::NotAnImage {
                tag: element.tag_name()?,
            })
        }
        // Collaborator-layer failures propagate unchanged
        Err(other) => return Err(other),
    }

    let engine = driver.engine();
    let script = detection_script(engine);
    debug!(?engine, "image visibility probe");
    let result = driver.execute_script(script, element)?;
    Ok(result.as_bool().unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;
    use crate::element::MockElement;
    use serde_json::json;

    /// Element whose attribute round-trip fails at the collaborator layer
    #[derive(Debug)]
    struct StaleElement;

    impl Element for StaleElement {
        fn tag_name(&self) -> crate::VerifyResult<String> {
            Ok("input".to_string())
        }

        fn text(&self) -> crate::VerifyResult<String> {
            Ok(String::new())
        }

        fn attribute(&self, _name: &str) -> crate::VerifyResult<Option<String>> {
            Err(VerifyError::Driver {
                message: "stale element reference".to_string(),
            })
        }

        fn css_value(&self, _property: &str) -> crate::VerifyResult<String> {
            Ok(String::new())
        }

        fn is_enabled(&self) -> crate::VerifyResult<bool> {
            Ok(true)
        }

        fn is_selected(&self) -> crate::VerifyResult<bool> {
            Ok(false)
        }

        fn is_displayed(&self) -> crate::VerifyResult<bool> {
            Ok(true)
        }

        fn size(&self) -> crate::VerifyResult<crate::ElementSize> {
            Ok(crate::ElementSize::new(0, 0))
        }

        fn location(&self) -> crate::VerifyResult<crate::ElementPoint> {
            Ok(crate::ElementPoint::new(0, 0))
        }

        fn find_by_tag(&self, _tag: &str) -> crate::VerifyResult<Vec<Self>> {
            Ok(Vec::new())
        }
    }

    #[derive(Debug, Default)]
    struct StaleDriver;

    impl Driver for StaleDriver {
        type Elem = StaleElement;

        fn title(&self) -> crate::VerifyResult<String> {
            Ok(String::new())
        }

        fn current_url(&self) -> crate::VerifyResult<String> {
            Ok(String::new())
        }

        fn navigate(&mut self, _url: &str) -> crate::VerifyResult<()> {
            Ok(())
        }

        fn cookie(&self, _name: &str) -> crate::VerifyResult<Option<String>> {
            Ok(None)
        }

        fn find_element(&self, locator: &crate::Locator) -> crate::VerifyResult<StaleElement> {
            Err(VerifyError::ElementNotFound {
                locator: locator.to_string(),
            })
        }

        fn find_elements(&self, _locator: &crate::Locator) -> crate::VerifyResult<Vec<StaleElement>> {
            Ok(Vec::new())
        }

        fn switch_to_alert(&mut self) -> crate::VerifyResult<()> {
            Err(VerifyError::NoAlertPresent)
        }

        fn engine(&self) -> EngineQuirk {
            EngineQuirk::Blink
        }
    }

    #[test]
    fn test_collaborator_error_during_classification_propagates() {
        let driver = StaleDriver;
        let err = is_image_visible(&driver, &StaleElement).unwrap_err();
        assert_eq!(
            err,
            VerifyError::Driver {
                message: "stale element reference".to_string(),
            }
        );
    }

    #[test]
    fn test_non_image_element_rejected() {
        let driver = MockDriver::new().with_script_result(json!(true));
        let elem = MockElement::new("div");
        let err = is_image_visible(&driver, &elem).unwrap_err();
        assert_eq!(
            err,
            VerifyError::NotAnImage {
                tag: "div".to_string()
            }
        );
    }

    #[test]
    fn test_scriptless_driver_rejected() {
        let driver = MockDriver::new();
        let elem = MockElement::new("img");
        assert_eq!(
            is_image_visible(&driver, &elem),
            Err(VerifyError::ScriptExecutionUnsupported)
        );
    }

    #[test]
    fn test_trident_uses_complete_flag() {
        let driver = MockDriver::new()
            .with_engine(EngineQuirk::Trident)
            .with_script_result(json!(true));
        let elem = MockElement::new("img");
        assert!(is_image_visible(&driver, &elem).unwrap());
        assert!(driver.was_called("execute_script:return arguments[0].complete"));
    }

    #[test]
    fn test_other_engines_probe_natural_width() {
        for engine in [
            EngineQuirk::Gecko,
            EngineQuirk::Blink,
            EngineQuirk::WebKit,
            EngineQuirk::Unknown,
        ] {
            let driver = MockDriver::new()
                .with_engine(engine)
                .with_script_result(json!(true));
            let elem = MockElement::new("img");
            assert!(is_image_visible(&driver, &elem).unwrap());
            assert!(driver.was_called("execute_script:return (typeof arguments[0].naturalWidth"));
        }
    }

    #[test]
    fn test_false_result_means_not_visible() {
        let driver = MockDriver::new().with_script_result(json!(false));
        let elem = MockElement::new("img");
        assert!(!is_image_visible(&driver, &elem).unwrap());
    }

    #[test]
    fn test_non_boolean_result_means_not_visible() {
        let driver = MockDriver::new().with_script_result(json!("weird"));
        let elem = MockElement::new("img");
        assert!(!is_image_visible(&driver, &elem).unwrap());
    }
}
