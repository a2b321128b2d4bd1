//! Block-flow height measurement.
//!
//! Every element stacks its rendered children vertically below its own box.
//! A closed `details` element renders only its disclosure summary.

use crate::document::{Document, NodeId};

impl Document {
    /// Rendered height of `id`, the equivalent of `offsetHeight`.
    ///
    /// Precedence: a running height animation, then the inline height
    /// style, then the natural height of the content. Elements hidden by a
    /// closed `details` ancestor measure zero.
    pub fn offset_height(&self, id: NodeId) -> f32 {
        if !self.is_rendered(id) {
            return 0.0;
        }
        self.box_height(id)
    }

    fn box_height(&self, id: NodeId) -> f32 {
        if let Some(height) = self.timeline.animated_height(id) {
            return height;
        }
        if let Some(height) = self.style_height(id) {
            return height;
        }
        self.natural_height(id)
    }

    /// Height the element would take with no inline style or animation.
    pub fn natural_height(&self, id: NodeId) -> f32 {
        let own = self.node(id).intrinsic_height;
        let children: f32 = self
            .rendered_children(id)
            .into_iter()
            .map(|child| self.box_height(child))
            .sum();
        own + children
    }

    /// Children that take part in layout.
    pub fn rendered_children(&self, id: NodeId) -> Vec<NodeId> {
        if self.is_closed_details(id) {
            return self.disclosure_summary(id).into_iter().collect();
        }
        self.children(id).to_vec()
    }

    /// Whether every ancestor lets `id` through.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        let mut child = id;
        for parent in self.ancestors(id) {
            if self.is_closed_details(parent) && self.disclosure_summary(parent) != Some(child) {
                return false;
            }
            child = parent;
        }
        true
    }

    /// The first direct `summary` child of a `details` element.
    pub fn disclosure_summary(&self, details: NodeId) -> Option<NodeId> {
        if self.tag(details) != "details" {
            return None;
        }
        self.children(details)
            .iter()
            .copied()
            .find(|&child| self.tag(child) == "summary")
    }

    fn is_closed_details(&self, id: NodeId) -> bool {
        self.tag(id) == "details" && !self.is_open(id)
    }
}
