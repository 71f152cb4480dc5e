//! Convert a parsed HTML tree to an Amber [`Document`].
//!
//! The walker reads the tree through a [`TreeWalker`] and translates every
//! element and text node into [`DocumentBuilder`] calls. Elements with
//! structural meaning consume their subtree through a sub-walk; everything
//! else is transparent and the outer walk continues into its children.

use amber_core::{Annotation, Document, DocumentBuilder, ListStyle};

use crate::elements::ElementRule;
use crate::node::Node;
use crate::traverse::TreeWalker;
use crate::utilities::{collapse_whitespace, is_formatting_whitespace, language_from_class};

/// Build the document tree for the content below `root`
pub fn build_document(root: &Node) -> Document {
    let mut walker = DocumentWalker::default();
    let mut cursor = TreeWalker::new(root);
    walker.walk(&mut cursor);
    walker.builder.finish()
}

#[derive(Debug, Default)]
struct DocumentWalker {
    builder: DocumentBuilder,
    /// Inside a `PRE` element
    significant_whitespace: bool,
}

impl DocumentWalker {
    fn walk(&mut self, cursor: &mut TreeWalker<'_>) {
        while let Some(node) = cursor.next_node() {
            if node.is_text() {
                self.visit_text(node.node_value.as_deref().unwrap_or(""));
                continue;
            }

            match ElementRule::for_node(node) {
                ElementRule::Paragraph => self.visit_paragraph(cursor),
                ElementRule::List(style) => self.visit_list(cursor, style),
                ElementRule::ListItem => self.visit_list_item(cursor),
                ElementRule::Heading(level) => self.visit_heading(cursor, level),
                ElementRule::Blockquote => self.visit_blockquote(cursor),
                ElementRule::Pre => self.visit_pre(cursor),
                ElementRule::Break => self.builder.append_text("\n"),
                ElementRule::Annotation(kind) => self.visit_annotation(cursor, kind),
                ElementRule::Code => self.visit_code(cursor),
                ElementRule::Anchor => self.visit_anchor(cursor),
                ElementRule::Block => self.visit_block(cursor),
                ElementRule::Transparent => {}
            }
        }
    }

    /// Process the subtree of the cursor's current element, then move the
    /// cursor past it
    fn descend(&mut self, cursor: &mut TreeWalker<'_>) {
        let saved = self.significant_whitespace;
        if cursor.current().tag_name() == "PRE" {
            self.significant_whitespace = true;
        }

        let mut sub = cursor.subtree();
        self.walk(&mut sub);
        cursor.resume(sub);

        self.significant_whitespace = saved;
    }

    fn visit_paragraph(&mut self, cursor: &mut TreeWalker<'_>) {
        self.builder.open_paragraph();
        self.descend(cursor);
        self.builder.end_content();
    }

    fn visit_list(&mut self, cursor: &mut TreeWalker<'_>, style: ListStyle) {
        self.builder.open_list(style);
        self.descend(cursor);
        self.builder.close_list();
    }

    fn visit_list_item(&mut self, cursor: &mut TreeWalker<'_>) {
        self.builder.open_list_item();
        self.descend(cursor);
        self.builder.close_list_item();
    }

    fn visit_heading(&mut self, cursor: &mut TreeWalker<'_>, level: u8) {
        self.builder.open_heading(level);
        self.descend(cursor);
        self.builder.end_content();
    }

    fn visit_blockquote(&mut self, cursor: &mut TreeWalker<'_>) {
        self.builder.push_blockquote_depth();
        self.descend(cursor);
        self.builder.pop_blockquote_depth();
    }

    fn visit_pre(&mut self, cursor: &mut TreeWalker<'_>) {
        let language = cursor
            .current()
            .find_descendant("CODE")
            .and_then(|code| code.attr("class"))
            .and_then(language_from_class);
        if let Some(language) = &language {
            log::debug!("extracted language: {language}");
        }

        self.builder.open_pre_block(language);
        self.descend(cursor);
        self.builder.end_content();
    }

    fn visit_annotation(&mut self, cursor: &mut TreeWalker<'_>, kind: Annotation) {
        self.builder.push_annotation(kind);
        self.descend(cursor);
        self.builder.pop_annotation();
    }

    fn visit_code(&mut self, cursor: &mut TreeWalker<'_>) {
        // Code inside code adds nothing
        if self.builder.is_significant_whitespace() {
            self.descend(cursor);
            return;
        }
        self.builder.push_code();
        self.descend(cursor);
        self.builder.pop_annotation();
    }

    fn visit_anchor(&mut self, cursor: &mut TreeWalker<'_>) {
        let href = cursor.current().attr("href").map(str::to_string);
        self.visit_annotation(cursor, Annotation::Link { href });
    }

    /// Generic block element: a line break inside code, a paragraph elsewhere.
    ///
    /// Inside code the children are left to the outer walk. Elsewhere a new
    /// paragraph is only opened when the current one already has content.
    fn visit_block(&mut self, cursor: &mut TreeWalker<'_>) {
        if self.builder.is_significant_whitespace() {
            if starts_new_line(cursor) {
                self.builder.append_text("\n");
            }
        } else if !self.builder.is_content_empty() {
            self.visit_paragraph(cursor);
        }
    }

    fn visit_text(&mut self, text: &str) {
        if self.significant_whitespace {
            self.builder.append_text(text);
            return;
        }
        if is_formatting_whitespace(text) {
            return;
        }

        let collapsed = collapse_whitespace(text);
        let text = match collapsed.strip_prefix(' ') {
            Some(rest) if self.builder.ends_with_space() => rest,
            _ => collapsed.as_ref(),
        };
        self.builder.append_text(text);
    }
}

/// A block element only breaks the line when visible text precedes it
fn starts_new_line(cursor: &TreeWalker<'_>) -> bool {
    cursor
        .previous_siblings()
        .iter()
        .any(|sibling| !sibling.text_content().trim().is_empty())
}
