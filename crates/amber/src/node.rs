//! DOM node structure consumed by the Amber converter.
//!
//! Any HTML parser can convert its output to this structure. Element names
//! are stored upper-case, matching the DOM `tagName` convention.

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
}

/// A parsed HTML node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g., "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text nodes
    pub node_value: Option<String>,

    /// Attributes in source order; empty for text nodes
    pub attributes: Vec<(String, String)>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_uppercase(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (uppercase)
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style [`add_child`](Node::add_child)
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Element => self.children().map(Node::text_content).collect(),
        }
    }

    /// First descendant element with the given tag name, in document order
    pub fn find_descendant(&self, tag_name: &str) -> Option<&Node> {
        self.children().find_map(|child| {
            if child.is_element() && child.node_name.eq_ignore_ascii_case(tag_name) {
                Some(child)
            } else {
                child.find_descendant(tag_name)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("div");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "DIV");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "https://example.com"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("HREF"), Some("https://example.com"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_text_content() {
        let div = Node::element("div")
            .with_child(Node::text("Hello "))
            .with_child(Node::element("span").with_child(Node::text("World")));
        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_find_descendant() {
        let pre = Node::element("pre").with_child(
            Node::element("span")
                .with_child(Node::element_with_attrs("code", vec![("class", "language-c")])),
        );
        let code = pre.find_descendant("code");
        assert_eq!(code.and_then(|c| c.attr("class")), Some("language-c"));
        assert!(pre.find_descendant("b").is_none());
    }
}
