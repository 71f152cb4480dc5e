//! # amber
//!
//! Convert HTML documents to Amber XML.
//!
//! ## Design
//!
//! Conversion runs in three stages. The HTML is parsed into a [`Node`] tree,
//! a document walker drives the [`DocumentBuilder`](amber_core::DocumentBuilder)
//! over that tree, and the resulting [`Document`] is rendered to XML.
//!
//! - **Total**: any input string converts; malformed markup is recovered by
//!   the HTML parser and unknown elements are transparent
//! - **Parser agnostic**: any HTML parser can convert to the Node structure
//!   and call [`AmberService::convert_node`]
//!
//! ## Example
//!
//! ```rust
//! use amber::AmberService;
//!
//! let service = AmberService::new();
//! let xml = service.convert("<ul><li>a</li><li>b</li></ul>");
//! assert_eq!(
//!     xml,
//!     "<document version=\"2.0\"><list style=\"unordered\">\
//!      <list-item><paragraph>a</paragraph></list-item>\
//!      <list-item><paragraph>b</paragraph></list-item>\
//!      </list></document>"
//! );
//! ```

use std::path::PathBuf;

mod elements;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;
mod traverse;
mod utilities;
mod walker;

pub use amber_core::{Document, RenderOptions, AMBER_VERSION};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use service::AmberService;
pub use traverse::TreeWalker;
pub use walker::build_document;

/// Error type for amber operations
#[derive(Debug, thiserror::Error)]
pub enum AmberError {
    #[error("Input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported media type: {0:?}")]
    UnsupportedMediaType(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AmberError>;

/// Convert HTML to Amber XML with default options
#[cfg(feature = "html")]
pub fn convert(html: &str) -> String {
    AmberService::new().convert(html)
}
