//! AmberService - the main entry point for HTML to Amber conversion.

#[cfg(feature = "html")]
use std::{fs, path::Path};

#[cfg(feature = "html")]
use amber_core::Document;
use amber_core::{render, RenderOptions};

use crate::node::Node;
use crate::walker::build_document;
#[cfg(feature = "html")]
use crate::{AmberError, Result};

/// The main service for converting HTML to Amber XML
#[derive(Debug, Clone, Default)]
pub struct AmberService {
    options: RenderOptions,
}

impl AmberService {
    /// Create an AmberService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an AmberService with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Convert an HTML string to Amber XML
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> String {
        render(&self.document(html), &self.options)
    }

    /// Build the document tree for an HTML string without rendering it
    #[cfg(feature = "html")]
    pub fn document(&self, html: &str) -> Document {
        build_document(&crate::html::parse_html(html))
    }

    /// Convert an already parsed node tree to Amber XML
    pub fn convert_node(&self, root: &Node) -> String {
        render(&build_document(root), &self.options)
    }

    /// Read `input`, convert it and write the XML to `output`
    #[cfg(feature = "html")]
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        if !input.exists() {
            return Err(AmberError::InputNotFound(input.to_path_buf()));
        }

        let html = fs::read_to_string(input)?;
        log::debug!("converting {} ({} bytes)", input.display(), html.len());
        fs::write(output, self.convert(&html))?;
        Ok(())
    }

    /// Convert the body of an HTTP request.
    ///
    /// Only `text/*` media types are accepted; parameters such as `charset`
    /// are ignored.
    #[cfg(feature = "html")]
    pub fn convert_request(&self, content_type: Option<&str>, body: &str) -> Result<String> {
        match content_type {
            Some(value) if is_text_media_type(value) => Ok(self.convert(body)),
            other => Err(AmberError::UnsupportedMediaType(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

#[cfg(feature = "html")]
fn is_text_media_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            kind.eq_ignore_ascii_case("text") && !subtype.trim().is_empty()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "html")]
    #[test]
    fn test_text_media_types() {
        assert!(is_text_media_type("text/html"));
        assert!(is_text_media_type("text/plain; charset=utf-8"));
        assert!(is_text_media_type(" TEXT/HTML "));
        assert!(!is_text_media_type("application/json"));
        assert!(!is_text_media_type("text/"));
        assert!(!is_text_media_type("text"));
        assert!(!is_text_media_type(""));
    }

    #[test]
    fn test_convert_node() {
        let body = Node::element("body")
            .with_child(Node::element("p").with_child(Node::text("hi")));
        let service = AmberService::new();
        assert_eq!(
            service.convert_node(&body),
            r#"<document version="2.0"><paragraph>hi</paragraph></document>"#
        );
    }

    #[test]
    fn test_options_mut() {
        let mut service = AmberService::new();
        service.options_mut().default_language = "text".to_string();
        assert_eq!(service.options().default_language, "text");
        assert!(service.options().drop_level_one_headings);
    }

    #[cfg(feature = "html")]
    mod html {
        use super::*;

        #[test]
        fn test_convert() {
            let service = AmberService::new();
            assert_eq!(
                service.convert("<p>Hello <b>world</b></p>"),
                r#"<document version="2.0"><paragraph>Hello <bold>world</bold></paragraph></document>"#
            );
        }

        #[test]
        fn test_keep_level_one_headings() {
            let service = AmberService::with_options(RenderOptions {
                drop_level_one_headings: false,
                ..RenderOptions::default()
            });
            assert_eq!(
                service.convert("<h1>Title</h1>"),
                r#"<document version="2.0"><heading level="1">Title</heading></document>"#
            );
        }

        #[test]
        fn test_convert_request() {
            let service = AmberService::new();
            let xml = service.convert_request(Some("text/html"), "<p>x</p>");
            assert_eq!(
                xml.ok().as_deref(),
                Some(r#"<document version="2.0"><paragraph>x</paragraph></document>"#)
            );

            let err = service.convert_request(Some("application/json"), "{}");
            assert!(matches!(err, Err(AmberError::UnsupportedMediaType(t)) if t == "application/json"));

            let err = service.convert_request(None, "<p>x</p>");
            assert!(matches!(err, Err(AmberError::UnsupportedMediaType(t)) if t.is_empty()));
        }

        #[test]
        fn test_convert_file() {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("in.html");
            let output = dir.path().join("out.xml");
            fs::write(&input, "<ul><li>a</li></ul>").unwrap();

            AmberService::new().convert_file(&input, &output).unwrap();
            assert_eq!(
                fs::read_to_string(&output).unwrap(),
                r#"<document version="2.0"><list style="unordered"><list-item><paragraph>a</paragraph></list-item></list></document>"#
            );
        }

        #[test]
        fn test_convert_file_missing_input() {
            let dir = tempfile::tempdir().unwrap();
            let input = dir.path().join("missing.html");
            let output = dir.path().join("out.xml");

            let err = AmberService::new().convert_file(&input, &output);
            assert!(matches!(err, Err(AmberError::InputNotFound(p)) if p == input));
            assert!(!output.exists());
        }
    }
}
