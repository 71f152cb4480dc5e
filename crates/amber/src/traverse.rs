//! Filtered pre-order traversal over a [`Node`] tree.

use crate::node::Node;
use crate::utilities::is_rejected;

/// Pre-order cursor over the element and text nodes below a root.
///
/// Rejected elements (see [`is_rejected`]) are skipped together with their
/// subtree. A walker can hand its current node to a [`subtree`] walker; once
/// that walker is exhausted, [`resume`] moves the parent to the position the
/// sub-walk reached, so the parent continues after the subtree instead of
/// visiting it a second time.
///
/// [`subtree`]: TreeWalker::subtree
/// [`resume`]: TreeWalker::resume
#[derive(Debug, Clone)]
pub struct TreeWalker<'a> {
    root: &'a Node,
    current: &'a Node,
    /// Ancestors of `current` from `root` down, each with the index of the
    /// child that leads to `current`
    path: Vec<(&'a Node, usize)>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self {
            root,
            current: root,
            path: Vec::new(),
        }
    }

    /// The node most recently returned by [`next_node`](TreeWalker::next_node)
    pub fn current(&self) -> &'a Node {
        self.current
    }

    /// Advance to the next accepted node in document order.
    ///
    /// Returns `None` once the subtree of the root is exhausted; the walker
    /// then stays on the last node it visited.
    pub fn next_node(&mut self) -> Option<&'a Node> {
        let node = self.current;
        if let Some(index) = first_accepted(node, 0) {
            self.path.push((node, index));
            self.current = &node.children[index];
            return Some(self.current);
        }

        for depth in (0..self.path.len()).rev() {
            let (parent, index) = self.path[depth];
            if let Some(next) = first_accepted(parent, index + 1) {
                self.path.truncate(depth + 1);
                self.path[depth].1 = next;
                self.current = &parent.children[next];
                return Some(self.current);
            }
        }

        None
    }

    /// A walker over the subtree of the current node
    pub fn subtree(&self) -> TreeWalker<'a> {
        TreeWalker::new(self.current)
    }

    /// Continue from the position a [`subtree`](TreeWalker::subtree) walker reached
    pub fn resume(&mut self, sub: TreeWalker<'a>) {
        if std::ptr::eq(sub.root, self.current) {
            self.path.extend(sub.path);
            self.current = sub.current;
        }
    }

    /// Siblings that precede the current node, accepted or not
    pub fn previous_siblings(&self) -> &'a [Node] {
        match self.path.last() {
            Some(&(parent, index)) => &parent.children[..index],
            None => &[],
        }
    }
}

fn first_accepted(node: &Node, from: usize) -> Option<usize> {
    node.children
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, child)| accepts(child))
        .map(|(index, _)| index)
}

fn accepts(node: &Node) -> bool {
    node.is_text() || !is_rejected(node.tag_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(node: &Node) -> String {
        if node.is_text() {
            node.text_content()
        } else {
            node.tag_name().to_string()
        }
    }

    fn sample() -> Node {
        Node::element("body")
            .with_child(
                Node::element("p")
                    .with_child(Node::text("a"))
                    .with_child(Node::element("b").with_child(Node::text("b"))),
            )
            .with_child(Node::element("script").with_child(Node::text("x()")))
            .with_child(Node::element("o:p").with_child(Node::text("junk")))
            .with_child(Node::text("c"))
    }

    #[test]
    fn test_preorder_skips_rejected_subtrees() {
        let body = sample();
        let mut walker = TreeWalker::new(&body);
        let mut seen = Vec::new();
        while let Some(node) = walker.next_node() {
            seen.push(label(node));
        }
        assert_eq!(seen, vec!["P", "a", "B", "b", "c"]);
    }

    #[test]
    fn test_exhausted_walker_keeps_position() {
        let body = sample();
        let mut walker = TreeWalker::new(&body);
        while walker.next_node().is_some() {}
        assert_eq!(label(walker.current()), "c");
        assert!(walker.next_node().is_none());
    }

    #[test]
    fn test_subtree_and_resume() {
        let body = sample();
        let mut walker = TreeWalker::new(&body);
        assert_eq!(walker.next_node().map(label), Some("P".to_string()));

        let mut sub = walker.subtree();
        let mut inner = Vec::new();
        while let Some(node) = sub.next_node() {
            inner.push(label(node));
        }
        assert_eq!(inner, vec!["a", "B", "b"]);

        walker.resume(sub);
        assert_eq!(walker.next_node().map(label), Some("c".to_string()));
        assert!(walker.next_node().is_none());
    }

    #[test]
    fn test_previous_siblings() {
        let body = sample();
        let mut walker = TreeWalker::new(&body);
        assert!(walker.previous_siblings().is_empty());
        walker.next_node();
        walker.next_node();
        walker.next_node();
        assert_eq!(label(walker.current()), "B");
        let previous: Vec<String> = walker.previous_siblings().iter().map(label).collect();
        assert_eq!(previous, vec!["a"]);
    }
}
