//! Ordered text-sequence extraction and comparison.
//!
//! Scrapes the text content of a family of child elements in document order
//! and compares it against an expected sequence. The comparison is strict
//! ordered equality: same length, same values, same positions. Reordering
//! the same items is a failure, not a match.

use crate::element::Element;
use crate::result::{VerifyError, VerifyResult};

/// Extract the ordered text contents of descendant elements by tag name
pub fn extract_ordered_texts<E: Element>(
    container: &E,
    item_tag: &str,
) -> VerifyResult<Vec<String>> {
    let mut texts = Vec::new();
    for item in container.find_by_tag(item_tag)? {
        texts.push(item.text()?);
    }
    Ok(texts)
}

/// Compare two text sequences for strict ordered equality
///
/// # Errors
///
/// [`VerifyError::SequenceLengthMismatch`] when the counts differ;
/// [`VerifyError::SequenceOrderMismatch`] at the first differing position.
pub fn compare_sequences(actual: &[String], expected: &[&str]) -> VerifyResult<()> {
    if actual.len() != expected.len() {
        return Err(VerifyError::SequenceLengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if a != e {
            return Err(VerifyError::SequenceOrderMismatch {
                index,
                expected: (*e).to_string(),
                actual: a.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::MockElement;

    fn list() -> MockElement {
        MockElement::new("ul")
            .with_child(MockElement::new("li").with_text("elem1"))
            .with_child(MockElement::new("li").with_text("elem2"))
            .with_child(MockElement::new("li").with_text("elem3"))
    }

    #[test]
    fn test_extract_in_document_order() {
        let texts = extract_ordered_texts(&list(), "li").unwrap();
        assert_eq!(texts, vec!["elem1", "elem2", "elem3"]);
    }

    #[test]
    fn test_extract_ignores_other_tags() {
        let container = MockElement::new("div")
            .with_child(MockElement::new("p").with_text("not me"))
            .with_child(MockElement::new("li").with_text("me"));
        assert_eq!(
            extract_ordered_texts(&container, "li").unwrap(),
            vec!["me"]
        );
    }

    #[test]
    fn test_equal_sequences_pass() {
        let actual = extract_ordered_texts(&list(), "li").unwrap();
        compare_sequences(&actual, &["elem1", "elem2", "elem3"]).unwrap();
    }

    #[test]
    fn test_reordered_items_fail() {
        let actual = extract_ordered_texts(&list(), "li").unwrap();
        let err = compare_sequences(&actual, &["elem2", "elem1", "elem3"]).unwrap_err();
        assert_eq!(
            err,
            VerifyError::SequenceOrderMismatch {
                index: 0,
                expected: "elem2".to_string(),
                actual: "elem1".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_count_fails() {
        let actual = extract_ordered_texts(&list(), "li").unwrap();
        let err = compare_sequences(&actual, &["elem1", "elem2"]).unwrap_err();
        assert_eq!(
            err,
            VerifyError::SequenceLengthMismatch {
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_empty_sequences_are_equal() {
        compare_sequences(&[], &[]).unwrap();
    }
}
