//! Remote browser driver collaborator trait.
//!
//! [`Driver`] abstracts the remote browser session the checks run against.
//! The session lifecycle, locator strategies, and transport all live behind
//! this trait; the verification layer only issues blocking round-trips and
//! normalizes the responses.
//!
//! Script execution is an optional capability: the default
//! [`Driver::execute_script`] fails with
//! [`VerifyError::ScriptExecutionUnsupported`], and only drivers that can
//! evaluate scripts against an element override it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::element::{Element, MockElement};
use crate::locator::Locator;
use crate::result::{VerifyError, VerifyResult};

/// Identifier for the browser engine driving the session
///
/// Used only to select the correct image-load detection strategy; no other
/// check depends on it. New quirks slot in here without touching unrelated
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineQuirk {
    /// Legacy Internet Explorer family
    Trident,
    /// Firefox family
    Gecko,
    /// Chromium family
    Blink,
    /// Safari family
    WebKit,
    /// Engine could not be identified
    Unknown,
}

/// Remote browser session collaborator
///
/// Every method is one blocking round-trip. Multi-step checks issue several
/// round-trips and are not atomic against the page; the page may mutate in
/// between.
pub trait Driver {
    /// Element handle type produced by this driver
    type Elem: Element;

    /// Current page title
    fn title(&self) -> VerifyResult<String>;

    /// Current page URL
    fn current_url(&self) -> VerifyResult<String>;

    /// Navigate to a URL, returning once the navigation call completes
    fn navigate(&mut self, url: &str) -> VerifyResult<()>;

    /// Value of a named cookie, `None` if not set
    fn cookie(&self, name: &str) -> VerifyResult<Option<String>>;

    /// Locate a single element
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ElementNotFound`] if the locator matches
    /// nothing.
    fn find_element(&self, locator: &Locator) -> VerifyResult<Self::Elem>;

    /// Locate all matching elements, in document order
    fn find_elements(&self, locator: &Locator) -> VerifyResult<Vec<Self::Elem>>;

    /// Switch context to the active alert
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::NoAlertPresent`] if no alert exists.
    fn switch_to_alert(&mut self) -> VerifyResult<()>;

    /// The engine quirk for this session
    fn engine(&self) -> EngineQuirk;

    /// Execute a script against an element and return its typed result
    ///
    /// Optional capability; the default implementation reports the driver as
    /// incapable.
    fn execute_script(
        &self,
        script: &str,
        element: &Self::Elem,
    ) -> VerifyResult<serde_json::Value> {
        let _ = (script, element);
        Err(VerifyError::ScriptExecutionUnsupported)
    }
}

/// Mock driver for unit testing
///
/// Canned session state plus a recorded call history for verifying which
/// round-trips a check issued.
#[derive(Debug, Default)]
pub struct MockDriver {
    /// Page title
    pub title: String,
    /// Current URL
    pub current_url: String,
    /// Cookies by name
    pub cookies: BTreeMap<String, String>,
    /// Elements by locator display form, in registration order
    pub elements: BTreeMap<String, Vec<MockElement>>,
    /// Whether an alert is currently open
    pub alert_open: bool,
    /// Engine quirk reported to the image prober
    pub engine: Option<EngineQuirk>,
    /// Result returned from script execution; `None` leaves the capability
    /// unsupported
    pub script_result: Option<serde_json::Value>,
    /// Artificial delay applied to `navigate`
    pub navigation_delay: Option<Duration>,
    call_history: RefCell<Vec<String>>,
}

impl MockDriver {
    /// Create a new mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a cookie
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Register an element under a locator
    ///
    /// A locator may accumulate several elements; `find_element` returns the
    /// first and `find_elements` returns all of them in registration order.
    #[must_use]
    pub fn with_element(mut self, locator: &Locator, element: MockElement) -> Self {
        self.elements
            .entry(locator.to_string())
            .or_default()
            .push(element);
        self
    }

    /// Set the engine quirk
    #[must_use]
    pub fn with_engine(mut self, engine: EngineQuirk) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Enable script execution with a canned result
    #[must_use]
    pub fn with_script_result(mut self, result: serde_json::Value) -> Self {
        self.script_result = Some(result);
        self
    }

    /// Apply an artificial navigation delay
    #[must_use]
    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.navigation_delay = Some(delay);
        self
    }

    /// Open an alert
    #[must_use]
    pub fn with_alert(mut self) -> Self {
        self.alert_open = true;
        self
    }

    /// Calls issued so far, in order
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.call_history.borrow().clone()
    }

    /// Whether a call starting with the given prefix was issued
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.call_history
            .borrow()
            .iter()
            .any(|c| c.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.call_history.borrow_mut().push(call);
    }
}

impl Driver for MockDriver {
    type Elem = MockElement;

    fn title(&self) -> VerifyResult<String> {
        self.record("title".to_string());
        Ok(self.title.clone())
    }

    fn current_url(&self) -> VerifyResult<String> {
        self.record("current_url".to_string());
        Ok(self.current_url.clone())
    }

    fn navigate(&mut self, url: &str) -> VerifyResult<()> {
        self.record(format!("navigate:{url}"));
        if let Some(delay) = self.navigation_delay {
            std::thread::sleep(delay);
        }
        self.current_url = url.to_string();
        Ok(())
    }

    fn cookie(&self, name: &str) -> VerifyResult<Option<String>> {
        self.record(format!("cookie:{name}"));
        Ok(self.cookies.get(name).cloned())
    }

    fn find_element(&self, locator: &Locator) -> VerifyResult<MockElement> {
        self.record(format!("find_element:{locator}"));
        self.elements
            .get(&locator.to_string())
            .and_then(|matches| matches.first())
            .cloned()
            .ok_or_else(|| VerifyError::ElementNotFound {
                locator: locator.to_string(),
            })
    }

    fn find_elements(&self, locator: &Locator) -> VerifyResult<Vec<MockElement>> {
        self.record(format!("find_elements:{locator}"));
        Ok(self
            .elements
            .get(&locator.to_string())
            .cloned()
            .unwrap_or_default())
    }

    fn switch_to_alert(&mut self) -> VerifyResult<()> {
        self.record("switch_to_alert".to_string());
        if self.alert_open {
            Ok(())
        } else {
            Err(VerifyError::NoAlertPresent)
        }
    }

    fn engine(&self) -> EngineQuirk {
        self.engine.unwrap_or(EngineQuirk::Unknown)
    }

    fn execute_script(
        &self,
        script: &str,
        _element: &MockElement,
    ) -> VerifyResult<serde_json::Value> {
        self.record(format!("execute_script:{script}"));
        self.script_result
            .clone()
            .ok_or(VerifyError::ScriptExecutionUnsupported)
    }
}
