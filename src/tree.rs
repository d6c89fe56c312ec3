use std::collections::BTreeMap;

use crate::{
    node::{Element, Node},
    split::{SplitMode, split_text},
};

/// One node of the split tree: a text fragment, a rebuilt element, or a
/// pass-through value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitUnit {
    Text(String),
    Element(SplitElement),
    Opaque(serde_json::Value),
}

/// An element rebuilt around its split children. `children: None` is a leaf
/// element carried over untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SplitElement {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SplitUnit>>,
}

/// Result of one tree-splitting pass: the split units in document order plus
/// the full concatenated text of the tree (for accessibility labelling).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SplitTree {
    pub units: Vec<SplitUnit>,
    pub text: String,
}

/// Splits every text leaf of `node` into fragments per `mode`, preserving the
/// surrounding structure.
///
/// Depth-first, left-to-right: nullish nodes vanish, fragments flatten,
/// composite elements are rebuilt with their children replaced by split
/// units, and leaf elements/opaque values pass through as single units.
/// Concatenating all text fragments in document order reproduces `text`.
pub fn split_tree(node: &Node, mode: SplitMode) -> SplitTree {
    let mut units = Vec::new();
    let mut text = String::new();
    split_into(node, mode, &mut units, &mut text);
    SplitTree { units, text }
}

fn split_into(node: &Node, mode: SplitMode, units: &mut Vec<SplitUnit>, text: &mut String) {
    match node {
        Node::Nullish => {}
        Node::Text(s) => {
            units.extend(split_text(s, mode).into_iter().map(SplitUnit::Text));
            text.push_str(s);
        }
        Node::Fragment(children) => {
            for child in children {
                split_into(child, mode, units, text);
            }
        }
        Node::Element(el) => units.push(split_element(el, mode, text)),
        Node::Opaque(v) => units.push(SplitUnit::Opaque(v.clone())),
    }
}

fn split_element(el: &Element, mode: SplitMode, text: &mut String) -> SplitUnit {
    let children = el.children.as_ref().map(|children| {
        let mut child_units = Vec::new();
        for child in children {
            split_into(child, mode, &mut child_units, text);
        }
        child_units
    });
    SplitUnit::Element(SplitElement {
        tag: el.tag.clone(),
        attrs: el.attrs.clone(),
        children,
    })
}

/// Counts the animatable units in a split tree: the number of sequence
/// indices one sequencing pass will hand out.
///
/// Text fragments count 1, composite elements contribute their children's
/// counts, and leaf elements/opaque values count 0 (they never receive a
/// sequence position).
pub fn count_units(units: &[SplitUnit]) -> usize {
    units
        .iter()
        .map(|unit| match unit {
            SplitUnit::Text(_) => 1,
            SplitUnit::Element(el) => el.children.as_deref().map_or(0, count_units),
            SplitUnit::Opaque(_) => 0,
        })
        .sum()
}
