//! Verificar: cross-engine DOM-state verification for browser UI tests.
//!
//! Verificar (Spanish: "to verify") answers well-defined yes/no questions
//! about a rendered page ("is this the expected color", "is this menu option
//! selected", "is this image actually rendered") and raises a structured
//! failure when the answer is no. Its core is a normalization layer: raw,
//! engine-dependent browser responses (CSS value strings, attribute strings,
//! script-execution results) are turned into semantically meaningful,
//! cross-engine-consistent verdicts before any comparison happens.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  checks (assertion surface)                                  │
//! ├──────────┬──────────┬─────────┬──────────┬─────────┬─────────┤
//! │  color   │   css    │  role   │   menu   │ listing │  image  │
//! ├──────────┴──────────┴─────────┴──────────┴─────────┴─────────┤
//! │  driver / element (collaborator traits)  ── remote browser   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The remote browser session and its element handles are external
//! collaborators behind the [`Driver`] and [`Element`] traits; session
//! lifecycle, locator strategies, and transport never live here. Every check
//! is evaluated once, synchronously, against current page state: no retries,
//! no polling, no caching across calls.
//!
//! # Example
//!
//! ```
//! use verificar::{checks, Driver, Locator, MockDriver, MockElement};
//!
//! let select = MockElement::new("select")
//!     .with_child(MockElement::new("option").with_text("one"))
//!     .with_child(MockElement::new("option").with_text("two").selected(true));
//! let driver = MockDriver::new().with_element(&Locator::id("lang"), select);
//!
//! let menu = driver.find_element(&Locator::id("lang")).unwrap();
//! checks::menu_option_selected(&menu, "two").unwrap();
//! assert!(checks::menu_option_selected(&menu, "four").is_err());
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod checks;
mod color;
mod css;
mod driver;
mod element;
mod image;
mod listing;
mod locator;
mod menu;
mod result;
mod role;

pub use color::Rgba;
pub use css::CssPosition;
pub use driver::{Driver, EngineQuirk, MockDriver};
pub use element::{Element, ElementPoint, ElementSize, MockElement};
pub use image::{detection_script, is_image_visible};
pub use listing::{compare_sequences, extract_ordered_texts};
pub use locator::Locator;
pub use menu::{Menu, MenuOption, MenuSnapshot};
pub use result::{VerifyError, VerifyResult};
pub use role::{classify, require_role, ElementRole};
