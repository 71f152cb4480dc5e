//! Element dispatch for HTML to Amber conversion.

use amber_core::{Annotation, ListStyle};

use crate::node::Node;
use crate::utilities::is_block;

/// How the document walker treats an HTML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRule {
    Paragraph,
    List(ListStyle),
    ListItem,
    Heading(u8),
    Blockquote,
    Pre,
    Break,
    /// Bold, italic, underline or strike
    Annotation(Annotation),
    Code,
    /// Link carrying the element's `href`
    Anchor,
    /// Any other block-level element
    Block,
    /// No structural effect; children are processed in place
    Transparent,
}

impl ElementRule {
    /// Find the rule for a tag name (case-insensitive)
    pub fn for_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_uppercase();
        match tag.as_str() {
            "P" => ElementRule::Paragraph,
            "OL" => ElementRule::List(ListStyle::Ordered),
            "UL" => ElementRule::List(ListStyle::Unordered),
            "LI" => ElementRule::ListItem,
            "H1" | "H2" | "H3" | "H4" | "H5" | "H6" => {
                let level = tag[1..].parse().unwrap_or(1);
                ElementRule::Heading(level)
            }
            "BLOCKQUOTE" => ElementRule::Blockquote,
            "PRE" => ElementRule::Pre,
            "BR" => ElementRule::Break,
            "B" | "STRONG" => ElementRule::Annotation(Annotation::Bold),
            "I" | "EM" => ElementRule::Annotation(Annotation::Italic),
            "U" => ElementRule::Annotation(Annotation::Underline),
            "S" | "DEL" | "STRIKE" => ElementRule::Annotation(Annotation::Strike),
            "CODE" => ElementRule::Code,
            "A" => ElementRule::Anchor,
            other if is_block(other) => ElementRule::Block,
            _ => ElementRule::Transparent,
        }
    }

    pub fn for_node(node: &Node) -> Self {
        Self::for_tag(node.tag_name())
    }
}
