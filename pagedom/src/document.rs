use std::fmt;

use crate::animation::Timeline;
use crate::element::{Content, Element, LINE_HEIGHT};
use crate::event::Listener;

/// Handle to a node inside a [`Document`].
///
/// Ids are assigned in document order when the document is built, so
/// comparing two ids compares their position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) text: Option<String>,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) intrinsic_height: f32,
    pub(crate) open: bool,
    /// Inline `height` style.
    pub(crate) style_height: Option<f32>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A live page: the element tree plus listeners and running animations.
///
/// Nodes are never added or removed after construction. Passing a `NodeId`
/// that came from a different document panics.
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) next_listener: u64,
    pub(crate) timeline: Timeline,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            timeline: Timeline::default(),
        };
        doc.insert(root, None);
        log::debug!("[document] Built document with {} nodes", doc.nodes.len());
        doc
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (text, children) = match element.content {
            Content::None => (None, Vec::new()),
            Content::Text(text) => (Some(text), Vec::new()),
            Content::Children(children) => (None, children),
        };
        let intrinsic_height = element
            .height
            .unwrap_or(if text.is_some() { LINE_HEIGHT } else { 0.0 });

        self.nodes.push(Node {
            tag: element.tag,
            text,
            attributes: element.attributes,
            intrinsic_height,
            open: element.open,
            style_height: None,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }

        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Tree

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text.as_deref()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    // Attributes

    /// Attribute names are ASCII case-insensitive and stored lowercased.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        let attributes = &mut self.node_mut(id).attributes;
        match attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => attributes.push((name, value)),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        let attributes = &mut self.node_mut(id).attributes;
        let index = attributes
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(attributes.remove(index).1)
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        &self.node(id).attributes
    }

    /// The element's `id` attribute.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.attribute(id, "id")
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&id| self.element_id(id) == Some(element_id))
    }

    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.attribute(id, "class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|c| c == class)
    }

    // Disclosure state

    pub fn is_open(&self, id: NodeId) -> bool {
        self.node(id).open
    }

    pub fn set_open(&mut self, id: NodeId, open: bool) {
        let node = self.node_mut(id);
        if node.open != open {
            log::trace!("[document] {} open: {} -> {}", id, node.open, open);
            node.open = open;
        }
    }

    // Inline style

    pub fn style_height(&self, id: NodeId) -> Option<f32> {
        self.node(id).style_height
    }

    pub fn set_style_height(&mut self, id: NodeId, height: f32) {
        self.node_mut(id).style_height = Some(height.max(0.0));
    }

    pub fn clear_style_height(&mut self, id: NodeId) {
        self.node_mut(id).style_height = None;
    }
}
