//! amber-core - Amber document tree, builder and XML rendering
//!
//! This crate provides the intermediate document tree for Amber conversion,
//! the stack-based [`DocumentBuilder`] that assembles it, and the renderer
//! that serializes it to Amber XML. It is used by `amber`, which drives the
//! builder from parsed HTML.
//!
//! # Architecture
//!
//! ```text
//!                ┌─────────────────┐     ┌───────────────┐
//! HTML walker ──▶│ DocumentBuilder │ ──▶ │ Document tree │ ──▶ Amber XML
//!                └─────────────────┘     └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use amber_core::{render, Annotation, DocumentBuilder, RenderOptions};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.append_text("Hello ");
//! builder.push_annotation(Annotation::Bold);
//! builder.append_text("world");
//! builder.pop_annotation();
//!
//! let xml = render(&builder.finish(), &RenderOptions::default());
//! assert_eq!(
//!     xml,
//!     r#"<document version="2.0"><paragraph>Hello <bold>world</bold></paragraph></document>"#
//! );
//! ```

mod ast;
mod builder;
mod options;
mod render;

pub use ast::{Annotation, Block, Document, Inline, ListItem, ListStyle};
pub use builder::DocumentBuilder;
pub use options::{RenderOptions, AMBER_VERSION};
pub use render::render;
