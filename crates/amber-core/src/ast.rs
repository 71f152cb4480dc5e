//! Amber document tree
//!
//! This module defines the nodes of the intermediate tree built from HTML.
//! The tree is the common input of every renderer.

/// Root of a converted document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    /// Check if the document has no content at all
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// List numbering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    /// Value of the `style` attribute in Amber XML
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStyle::Ordered => "ordered",
            ListStyle::Unordered => "unordered",
        }
    }
}

/// A block-level node
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Default content container
    Paragraph(Vec<Inline>),

    /// Heading with level (1-6) and inline content
    Heading { level: u8, content: Vec<Inline> },

    /// Quote around the single block that followed the quote opening
    Blockquote(Vec<Block>),

    /// List of items
    List {
        style: ListStyle,
        items: Vec<ListItem>,
    },

    /// Inline-code container opened directly under a structural branch
    Code(Vec<Inline>),

    /// Preformatted region where whitespace is significant
    Pre {
        language: Option<String>,
        content: Vec<Inline>,
    },
}

/// A list item containing blocks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub content: Vec<Block>,
}

impl ListItem {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            content: vec![Block::Paragraph(inlines)],
        }
    }
}

/// Inline formatting mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Bold,
    Italic,
    Underline,
    Strike,
    Link { href: Option<String> },
}

impl Annotation {
    /// Element name used for this mark in Amber XML
    pub fn name(&self) -> &'static str {
        match self {
            Annotation::Bold => "bold",
            Annotation::Italic => "italic",
            Annotation::Underline => "underline",
            Annotation::Strike => "strike",
            Annotation::Link { .. } => "link",
        }
    }
}

/// An inline node
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Explicit line break
    Break,

    /// Formatted run
    Annotation {
        kind: Annotation,
        content: Vec<Inline>,
    },

    /// Inline code; whitespace inside is significant
    Code(Vec<Inline>),
}

impl Inline {
    pub fn text(value: &str) -> Self {
        Inline::Text(value.to_string())
    }
}
