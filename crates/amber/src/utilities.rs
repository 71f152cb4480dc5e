//! Utility functions and constants for HTML processing.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Block-level HTML elements
pub const BLOCK_ELEMENTS: &[&str] = &[
    "ADDRESS", "ARTICLE", "ASIDE", "BLOCKQUOTE", "DETAILS", "DIALOG", "DD", "DIV",
    "DL", "DT", "FIELDSET", "FIGCAPTION", "FIGURE", "FOOTER", "FORM", "H1", "H2",
    "H3", "H4", "H5", "H6", "HEADER", "HGROUP", "HR", "LI", "MAIN", "NAV", "OL",
    "P", "PRE", "SECTION", "TABLE", "UL",
];

/// Elements skipped, with their subtree, during traversal
pub const REJECTED_ELEMENTS: &[&str] = &["COL", "META", "TEMPLATE", "HEAD", "TITLE", "SCRIPT"];

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag.to_ascii_uppercase().as_str())
}

/// Check if an element is skipped during traversal.
///
/// Besides the denylist this covers namespaced tags such as `O:P`, which word
/// processors leave behind in pasted HTML.
pub fn is_rejected(tag: &str) -> bool {
    tag.contains(':') || REJECTED_ELEMENTS.contains(&tag.to_ascii_uppercase().as_str())
}

/// Check if text only formats the source markup (whitespace with a line break)
pub fn is_formatting_whitespace(text: &str) -> bool {
    text.contains('\n') && text.chars().all(char::is_whitespace)
}

/// Collapse every whitespace run into a single space
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Extract the language from a `language-*` class attribute
pub fn language_from_class(class: &str) -> Option<String> {
    class
        .strip_prefix("language-")
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_string)
}
