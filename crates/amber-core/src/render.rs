//! Amber XML rendering
//!
//! Converts a [`Document`] into Amber XML text.

use std::borrow::Cow;

use html_escape::{
    decode_html_entities, encode_double_quoted_attribute_to_string, encode_text_to_string,
};

use crate::ast::{Annotation, Block, Document, Inline, ListItem};
use crate::options::{RenderOptions, AMBER_VERSION};

/// Render a document to an Amber XML string
pub fn render(doc: &Document, options: &RenderOptions) -> String {
    let mut output = String::with_capacity(4096);
    element(&mut output, "document", &[("version", AMBER_VERSION)], |out| {
        render_blocks(&doc.children, options, out);
    });
    output
}

fn render_blocks(blocks: &[Block], options: &RenderOptions, out: &mut String) {
    for block in blocks {
        render_block(block, options, out);
    }
}

fn render_block(block: &Block, options: &RenderOptions, out: &mut String) {
    match block {
        Block::Paragraph(content) => {
            element(out, "paragraph", &[], |out| render_inlines(content, out));
        }

        Block::Heading { level, content } => {
            // Level-1 headings are dropped with everything inside them
            if *level == 1 && options.drop_level_one_headings {
                log::debug!("dropping level-1 heading");
                return;
            }
            let level = level.to_string();
            element(out, "heading", &[("level", level.as_str())], |out| {
                render_inlines(content, out)
            });
        }

        Block::Blockquote(blocks) => {
            element(
                out,
                "callout",
                &[("type", options.callout_type.as_str())],
                |out| render_blocks(blocks, options, out),
            );
        }

        Block::List { style, items } => {
            element(out, "list", &[("style", style.as_str())], |out| {
                render_list_items(items, options, out)
            });
        }

        Block::Code(content) => {
            element(out, "pre", &[], |out| render_code(content, out));
        }

        Block::Pre { language, content } => {
            let language = language
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or(options.default_language.as_str());
            element(
                out,
                "snippet",
                &[
                    ("language", language),
                    ("runnable", "true"),
                    ("line-numbers", "true"),
                ],
                |out| render_code(content, out),
            );
        }
    }
}

fn render_list_items(items: &[ListItem], options: &RenderOptions, out: &mut String) {
    for item in items {
        element(out, "list-item", &[], |out| {
            render_blocks(&item.content, options, out)
        });
    }
}

fn render_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        render_inline(inline, out);
    }
}

fn render_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(text) => {
            encode_text_to_string(xml_chars(text), out);
        }

        Inline::Break => element(out, "break", &[], |_| {}),

        Inline::Annotation { kind, content } => match kind {
            Annotation::Link { href: Some(href) } => {
                element(out, "link", &[("href", href.as_str())], |out| {
                    render_inlines(content, out)
                });
            }
            _ => element(out, kind.name(), &[], |out| render_inlines(content, out)),
        },

        Inline::Code(content) => {
            element(out, "pre", &[], |out| render_code(content, out));
        }
    }
}

/// Render the content of a code region as plain text.
///
/// Formatting has no representation inside code, so marks are flattened to
/// their text. Every text run is entity-decoded and followed by a newline.
fn render_code(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                encode_text_to_string(xml_chars(&decode_html_entities(text)), out);
                out.push('\n');
            }
            Inline::Break => {}
            Inline::Annotation { content, .. } | Inline::Code(content) => {
                render_code(content, out);
            }
        }
    }
}

/// Write an element, self-closing it when `body` writes nothing
fn element<F>(out: &mut String, name: &str, attrs: &[(&str, &str)], body: F)
where
    F: FnOnce(&mut String),
{
    out.push('<');
    out.push_str(name);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        encode_double_quoted_attribute_to_string(xml_chars(value), out);
        out.push('"');
    }
    out.push('>');

    let content_start = out.len();
    body(out);

    if out.len() == content_start {
        out.pop();
        out.push_str("/>");
    } else {
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}

/// Drop characters that XML 1.0 does not allow in a document
fn xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}
