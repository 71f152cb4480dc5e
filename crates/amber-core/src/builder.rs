//! Stack-based document builder
//!
//! [`DocumentBuilder`] assembles a [`Document`] one call at a time. It keeps
//! three pieces of state:
//!
//! - the branch stack: open lists and list items below the document root,
//! - the content path: the open paragraph, heading or code region plus the
//!   inline marks opened inside it,
//! - the quote depth, used to wrap the next paragraph or heading in a
//!   blockquote.
//!
//! Open nodes are owned by the builder and moved into their parent when they
//! are closed, so the finished tree has a single owner and no back-edges.
//! Every operation is total: unexpected call sequences produce empty or
//! implicit containers, never errors.

use crate::ast::{Annotation, Block, Document, Inline, ListItem, ListStyle};

const TAB: &str = "    ";

/// An open structural container below the document root
#[derive(Debug)]
enum Branch {
    List {
        style: ListStyle,
        items: Vec<ListItem>,
        /// Opened around a stray list item; closes with that item
        implicit: bool,
    },
    ListItem {
        content: Vec<Block>,
        /// Created by the builder rather than requested by the caller
        implicit: bool,
    },
}

#[derive(Debug)]
enum ContentKind {
    Paragraph,
    Heading(u8),
    Code,
    Pre(Option<String>),
}

/// The open node receiving text and inline marks
#[derive(Debug)]
struct Content {
    kind: ContentKind,
    quoted: bool,
    children: Vec<Inline>,
}

impl Content {
    fn new(kind: ContentKind, quoted: bool) -> Self {
        Self {
            kind,
            quoted,
            children: Vec::new(),
        }
    }

    fn is_significant_whitespace(&self) -> bool {
        matches!(self.kind, ContentKind::Code | ContentKind::Pre(_))
    }

    fn into_block(self) -> Block {
        let block = match self.kind {
            ContentKind::Paragraph => Block::Paragraph(self.children),
            ContentKind::Heading(level) => Block::Heading {
                level,
                content: self.children,
            },
            ContentKind::Code => Block::Code(self.children),
            ContentKind::Pre(language) => Block::Pre {
                language,
                content: self.children,
            },
        };

        if self.quoted {
            Block::Blockquote(vec![block])
        } else {
            block
        }
    }
}

#[derive(Debug)]
enum Mark {
    Annotation(Annotation),
    Code,
}

#[derive(Debug)]
struct OpenMark {
    mark: Mark,
    children: Vec<Inline>,
}

impl OpenMark {
    fn into_inline(self) -> Inline {
        match self.mark {
            Mark::Annotation(kind) => Inline::Annotation {
                kind,
                content: self.children,
            },
            Mark::Code => Inline::Code(self.children),
        }
    }
}

/// Incremental builder for a [`Document`]
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    /// Blocks attached directly to the document root
    root: Vec<Block>,
    /// Open containers below the root, outermost first
    branches: Vec<Branch>,
    content: Option<Content>,
    /// Inline marks open inside `content`, outermost first
    marks: Vec<OpenMark>,
    blockquote_depth: usize,
    /// The innermost quote has not wrapped a block yet
    quote_pending: bool,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether text appended now keeps its line breaks verbatim.
    ///
    /// Lets a caller decide how to treat markup inside code, e.g. nested
    /// code elements or block elements that only break the line.
    pub fn is_significant_whitespace(&self) -> bool {
        self.marks.iter().any(|m| matches!(m.mark, Mark::Code))
            || self
                .content
                .as_ref()
                .is_some_and(Content::is_significant_whitespace)
    }

    /// True if a content node is open and nothing has been appended to it yet
    pub fn is_content_empty(&self) -> bool {
        match self.marks.last() {
            Some(mark) => mark.children.is_empty(),
            None => self.content.as_ref().is_some_and(|c| c.children.is_empty()),
        }
    }

    /// True if the last text appended to the current node ends with a space.
    ///
    /// Walkers that collapse whitespace use it to avoid doubling a space
    /// across adjacent text nodes.
    pub fn ends_with_space(&self) -> bool {
        let children = match (self.marks.last(), &self.content) {
            (Some(mark), _) => &mark.children,
            (None, Some(content)) => &content.children,
            (None, None) => return false,
        };
        matches!(children.last(), Some(Inline::Text(text)) if text.ends_with(' '))
    }

    /// Append text to the current content node, opening a paragraph if needed.
    ///
    /// Tabs become four spaces. Line breaks become [`Inline::Break`] nodes, or
    /// stay literal newlines inside code.
    pub fn append_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        // Whitespace between list items has nowhere to go
        if self.content.is_none() && self.in_bare_list() && s.trim().is_empty() {
            return;
        }

        self.ensure_content();
        let significant = self.is_significant_whitespace();
        let children = self.current_children();

        let mut lines = s.split('\n').peekable();
        while let Some(line) = lines.next() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.is_empty() {
                push_text(children, &line.replace('\t', TAB));
            }
            if lines.peek().is_some() {
                if significant {
                    push_text(children, "\n");
                } else {
                    children.push(Inline::Break);
                }
            }
        }
    }

    pub fn open_paragraph(&mut self) {
        self.open_content(ContentKind::Paragraph);
    }

    pub fn open_heading(&mut self, level: u8) {
        self.open_content(ContentKind::Heading(level.clamp(1, 6)));
    }

    /// Open an inline-code container directly under the current branch
    pub fn open_code_container(&mut self) {
        self.end_content();
        self.content = Some(Content::new(ContentKind::Code, false));
    }

    pub fn open_pre_block(&mut self, language: Option<String>) {
        self.end_content();
        self.content = Some(Content::new(ContentKind::Pre(language), false));
    }

    pub fn open_list(&mut self, style: ListStyle) {
        self.end_content();
        // A list directly inside a list needs an item to live in
        if self.in_bare_list() {
            log::trace!("opening implicit list item for nested list");
            self.branches.push(Branch::ListItem {
                content: Vec::new(),
                implicit: true,
            });
        }
        self.branches.push(Branch::List {
            style,
            items: Vec::new(),
            implicit: false,
        });
    }

    pub fn open_list_item(&mut self) {
        self.ensure_list();
        self.branches.push(Branch::ListItem {
            content: Vec::new(),
            implicit: false,
        });
    }

    /// Close the innermost list, including directly nested lists
    pub fn close_list(&mut self) {
        self.close_implicit_item();
        while matches!(self.branches.last(), Some(Branch::List { .. })) {
            self.pop_branch();
        }
        self.close_implicit_item();
    }

    pub fn close_list_item(&mut self) {
        while matches!(self.branches.last(), Some(Branch::ListItem { .. })) {
            self.pop_branch();
        }
        if matches!(self.branches.last(), Some(Branch::List { implicit: true, .. })) {
            self.pop_branch();
        }
    }

    /// Enter a quote; the next paragraph or heading gets wrapped
    pub fn push_blockquote_depth(&mut self) {
        self.end_content();
        self.blockquote_depth += 1;
        self.quote_pending = true;
    }

    pub fn pop_blockquote_depth(&mut self) {
        self.end_content();
        self.blockquote_depth = self.blockquote_depth.saturating_sub(1);
        if self.blockquote_depth == 0 {
            self.quote_pending = false;
        }
    }

    pub fn push_annotation(&mut self, kind: Annotation) {
        self.push_mark(Mark::Annotation(kind));
    }

    /// Open inline code inside the current content node
    pub fn push_code(&mut self) {
        self.push_mark(Mark::Code);
    }

    /// Close the innermost inline mark, restoring its parent as the content node
    pub fn pop_annotation(&mut self) {
        match self.marks.pop() {
            Some(mark) => {
                let inline = mark.into_inline();
                self.current_children().push(inline);
            }
            None => self.end_content(),
        }
    }

    /// Close the content node and any marks open inside it
    pub fn end_content(&mut self) {
        while let Some(mark) = self.marks.pop() {
            let inline = mark.into_inline();
            match self.marks.last_mut() {
                Some(parent) => parent.children.push(inline),
                None => {
                    if let Some(content) = self.content.as_mut() {
                        content.children.push(inline);
                    }
                }
            }
        }

        if let Some(content) = self.content.take() {
            self.attach_block(content.into_block());
        }
    }

    /// Close everything still open and return the finished document
    pub fn finish(mut self) -> Document {
        self.end_content();
        while !self.branches.is_empty() {
            self.pop_branch();
        }
        Document::new(self.root)
    }

    fn open_content(&mut self, kind: ContentKind) {
        self.end_content();
        let quoted = std::mem::take(&mut self.quote_pending);
        self.content = Some(Content::new(kind, quoted));
    }

    fn ensure_content(&mut self) -> &mut Content {
        if self.content.is_none() {
            self.open_paragraph();
        }
        self.content
            .get_or_insert_with(|| Content::new(ContentKind::Paragraph, false))
    }

    fn current_children(&mut self) -> &mut Vec<Inline> {
        if self.marks.is_empty() {
            &mut self.ensure_content().children
        } else {
            let top = self.marks.len() - 1;
            &mut self.marks[top].children
        }
    }

    fn push_mark(&mut self, mark: Mark) {
        self.ensure_content();
        self.marks.push(OpenMark {
            mark,
            children: Vec::new(),
        });
    }

    fn in_bare_list(&self) -> bool {
        matches!(self.branches.last(), Some(Branch::List { .. }))
    }

    /// Close list items up to the nearest list, opening one if there is none
    fn ensure_list(&mut self) {
        self.end_content();
        while matches!(self.branches.last(), Some(Branch::ListItem { .. })) {
            self.pop_branch();
        }
        if self.branches.is_empty() {
            log::trace!("opening implicit list for list item");
            self.branches.push(Branch::List {
                style: ListStyle::Unordered,
                items: Vec::new(),
                implicit: true,
            });
        }
    }

    fn close_implicit_item(&mut self) {
        if matches!(
            self.branches.last(),
            Some(Branch::ListItem { implicit: true, .. })
        ) {
            self.pop_branch();
        }
    }

    fn pop_branch(&mut self) {
        self.end_content();
        match self.branches.pop() {
            Some(Branch::List { style, items, .. }) => {
                self.attach_block(Block::List { style, items });
            }
            Some(Branch::ListItem { content, .. }) => {
                self.attach_item(ListItem::new(content));
            }
            None => {}
        }
    }

    fn attach_block(&mut self, block: Block) {
        match self.branches.last_mut() {
            None => self.root.push(block),
            Some(Branch::ListItem { content, .. }) => content.push(block),
            Some(Branch::List { .. }) => {
                log::trace!("opening implicit list item for stray block");
                self.branches.push(Branch::ListItem {
                    content: vec![block],
                    implicit: true,
                });
            }
        }
    }

    fn attach_item(&mut self, item: ListItem) {
        match self.branches.last_mut() {
            Some(Branch::List { items, .. }) => items.push(item),
            _ => self.attach_block(Block::List {
                style: ListStyle::Unordered,
                items: vec![item],
            }),
        }
    }
}

/// Append to the trailing text leaf, or start a new one
fn push_text(children: &mut Vec<Inline>, s: &str) {
    if let Some(Inline::Text(last)) = children.last_mut() {
        last.push_str(s);
    } else {
        children.push(Inline::Text(s.to_string()));
    }
}
