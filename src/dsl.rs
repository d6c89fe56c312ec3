use std::collections::BTreeMap;

use crate::{
    error::{StaggerError, StaggerResult},
    node::{Element, Node},
};

/// A text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// A flat sequence of sibling nodes.
pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

/// Builds an [`Element`] node. An element starts without a children relation
/// (a pass-through leaf); adding any child, or calling [`children`], makes it
/// composite.
///
/// [`children`]: ElementBuilder::children
pub struct ElementBuilder {
    tag: String,
    attrs: BTreeMap<String, serde_json::Value>,
    children: Option<Vec<Node>>,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: None,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(node.into());
        self
    }

    /// Sets the children relation, composite even when `nodes` is empty.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children = Some(nodes.into_iter().collect());
        self
    }

    pub fn build(self) -> StaggerResult<Node> {
        if self.tag.trim().is_empty() {
            return Err(StaggerError::validation("element tag must be non-empty"));
        }
        Ok(Node::Element(Element {
            tag: self.tag,
            attrs: self.attrs,
            children: self.children,
        }))
    }
}
