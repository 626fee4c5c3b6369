//! Result and error types for Verificar.

use thiserror::Error;

/// Result type for Verificar checks
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors raised by the verification layer
///
/// Every failed check maps onto exactly one variant. Failures originating in
/// the driver/element collaborator propagate through [`VerifyError::Driver`]
/// and [`VerifyError::ElementNotFound`] without translation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VerifyError {
    /// A CSS color string matched no supported grammar
    #[error("Unparsable color value: {value:?}")]
    UnparsableColor {
        /// The raw string returned by the browser
        value: String,
    },

    /// A CSS property or attribute value differed from the expectation
    #[error("Property '{property}' mismatch: expected {expected:?}, got {actual:?}")]
    PropertyMismatch {
        /// Property or attribute name queried
        property: String,
        /// Expected value
        expected: String,
        /// Value the browser reported
        actual: String,
    },

    /// A named check compared two values that differed
    #[error("{check}: expected {expected:?}, got {actual:?}")]
    ValueMismatch {
        /// Name of the check that failed
        check: String,
        /// Expected value
        expected: String,
        /// Value the browser reported
        actual: String,
    },

    /// A boolean state check did not hold
    #[error("{check}: {message}")]
    ConditionFailed {
        /// Name of the check that failed
        check: String,
        /// Human-readable description of the violated condition
        message: String,
    },

    /// No known combination of tag name and `type` attribute matched
    #[error("Unrecognized element role: tag {tag:?}, type attribute {type_attr:?}")]
    UnrecognizedRole {
        /// Tag name of the element
        tag: String,
        /// Value of the `type` attribute, if present
        type_attr: Option<String>,
    },

    /// The element does not have the asserted role
    #[error("Element is not a {role}: {detail}")]
    RoleMismatch {
        /// The role that was asserted
        role: String,
        /// Which expectation (tag or type attribute) was violated
        detail: String,
    },

    /// The element cannot be adapted as a selection widget
    #[error("Element is not a menu: tag {tag:?} is not 'select'")]
    NotAMenu {
        /// Tag name of the element
        tag: String,
    },

    /// The element is not an image
    #[error("Element is not an image: tag {tag:?} is not 'img'")]
    NotAnImage {
        /// Tag name of the element
        tag: String,
    },

    /// The driver does not expose script execution
    #[error("Driver does not support script execution")]
    ScriptExecutionUnsupported,

    /// No alert is currently active
    #[error("Alert window not found")]
    NoAlertPresent,

    /// The locator matched no element (pass-through from the driver)
    #[error("Element not found using locator: {locator}")]
    ElementNotFound {
        /// Locator expression that matched nothing
        locator: String,
    },

    /// Two sequences differed in length
    #[error("Sequence length mismatch: expected {expected} items, got {actual}")]
    SequenceLengthMismatch {
        /// Expected item count
        expected: usize,
        /// Actual item count
        actual: usize,
    },

    /// Two sequences differed at a position
    #[error("Sequence mismatch at index {index}: expected {expected:?}, got {actual:?}")]
    SequenceOrderMismatch {
        /// First differing position
        index: usize,
        /// Expected item at that position
        expected: String,
        /// Actual item at that position
        actual: String,
    },

    /// Navigation exceeded the time budget
    #[error("Page {url} took {elapsed_ms}ms to load (budget {budget_ms}ms)")]
    ResponseTimeExceeded {
        /// URL that was navigated to
        url: String,
        /// Measured wall-clock duration in milliseconds
        elapsed_ms: u64,
        /// Allowed duration in milliseconds
        budget_ms: u64,
    },

    /// Collaborator-layer failure, propagated unchanged
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_time_message_carries_measured_figure() {
        let err = VerifyError::ResponseTimeExceeded {
            url: "http://localhost/app".to_string(),
            elapsed_ms: 6000,
            budget_ms: 5000,
        };
        let message = err.to_string();
        assert!(message.contains("6000"));
        assert!(message.contains("5000"));
    }

    #[test]
    fn test_sequence_mismatch_names_index() {
        let err = VerifyError::SequenceOrderMismatch {
            index: 1,
            expected: "two".to_string(),
            actual: "three".to_string(),
        };
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_element_not_found_names_locator() {
        let err = VerifyError::ElementNotFound {
            locator: "css:#missing".to_string(),
        };
        assert!(err.to_string().contains("#missing"));
    }
}
