//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and converts the
//! document body to the [`Node`] structure walked by the converter. Parse
//! errors are recovered by html5ever and never reported.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string and return its `<body>` as a Node tree.
///
/// Fragments are accepted; the parser places them in an implied body.
///
/// # Example
///
/// ```rust
/// use amber::parse_html;
///
/// let body = parse_html("<h2>Hello <em>World</em></h2>");
/// assert_eq!(body.tag_name(), "BODY");
/// assert_eq!(body.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let body = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name().eq_ignore_ascii_case("body"));

    match body {
        Some(body) => scraper_to_node(body),
        None => scraper_to_node(root),
    }
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
