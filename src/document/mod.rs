//! Ordered element trees for project and module documents
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Every node keeps a
//! direct link to its parent, so detaching a subtree is a single parent-link removal and
//! ids of all other nodes stay valid afterwards.
//!
//! A detached node stays in the arena but is no longer reachable from the root; writers
//! only ever walk from the root.

pub mod xml;

use std::collections::VecDeque;

/// Index of a node inside one [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An element tree with a single root
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document holding only a root element
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_tag)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.nodes[id.0]
            .attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        &self.nodes[id.0].attributes
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, id: NodeId, key: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.nodes[id.0].attributes;
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => attributes.push((key.to_string(), value)),
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].text.as_deref()
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = Some(text.into());
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Create a new element that is not yet attached anywhere
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Create an element and append it under `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    /// Remove the link between `id` and its parent. The subtree below `id` is kept intact.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent.take() else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != id);
    }

    /// Whether `id` can be reached from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Direct children of `parent` with the given tag and, if given, `name` attribute
    pub fn find_children<'a>(
        &'a self,
        parent: NodeId,
        tag: &'a str,
        name: Option<&'a str>,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(parent).iter().copied().filter(move |&c| {
            self.tag(c) == tag && name.is_none_or(|n| self.attribute(c, "name") == Some(n))
        })
    }

    /// First direct child of `parent` matching tag and optional name
    pub fn find_child(&self, parent: NodeId, tag: &str, name: Option<&str>) -> Option<NodeId> {
        self.find_children(parent, tag, name).next()
    }

    /// All nodes of the subtree rooted at `id` in document order, `id` included
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![id],
        }
    }

    /// Nodes with `tag` in the subtree rooted at `id`, in document order.
    ///
    /// The iterator is lazy; call again to restart.
    pub fn iter_tag<'a>(&'a self, id: NodeId, tag: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(id).filter(move |&n| self.tag(n) == tag)
    }

    /// Deep-copy the subtree rooted at `node` of `other` into this document.
    ///
    /// Returns the id of the copied root, which is left detached.
    pub fn import_subtree(&mut self, other: &Document, node: NodeId) -> NodeId {
        let copy_root = self.copy_node(other, node);
        let mut pending = VecDeque::from([(node, copy_root)]);
        while let Some((source, target)) = pending.pop_front() {
            for &child in other.children(source) {
                let copied = self.copy_node(other, child);
                self.append_child(target, copied);
                pending.push_back((child, copied));
            }
        }
        copy_root
    }

    fn copy_node(&mut self, other: &Document, node: NodeId) -> NodeId {
        let source = &other.nodes[node.0];
        let id = self.create_element(source.tag.clone());
        self.nodes[id.0].attributes = source.attributes.clone();
        self.nodes[id.0].text = source.text.clone();
        id
    }

    /// Structural equality of two subtrees: tags, attributes, text and child order
    pub fn subtree_eq(&self, id: NodeId, other: &Document, other_id: NodeId) -> bool {
        let a = &self.nodes[id.0];
        let b = &other.nodes[other_id.0];
        a.tag == b.tag
            && a.attributes == b.attributes
            && a.text == b.text
            && a.children.len() == b.children.len()
            && a
                .children
                .iter()
                .zip(&b.children)
                .all(|(&x, &y)| self.subtree_eq(x, other, y))
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.document.children(id).iter().rev().copied());
        Some(id)
    }
}
