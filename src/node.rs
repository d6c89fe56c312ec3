use std::collections::BTreeMap;

/// A renderable content node, as handed over by the hosting UI layer.
///
/// The engine never inspects framework-specific runtime shapes; an adapter at
/// the framework boundary builds this closed model instead. Classification is
/// total: every value the host can render maps to exactly one variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Text content. Numbers are text-like too; use the `From` conversions.
    Text(String),
    /// Nothing to render: null/undefined/boolean in conditional-rendering idioms.
    Nullish,
    /// An array of sibling nodes, flattened in order by the tree splitter.
    Fragment(Vec<Node>),
    /// A structural element. Composite iff its children relation is present.
    Element(Element),
    /// Anything else (host-specific values); passed through untouched.
    Opaque(serde_json::Value),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, serde_json::Value>,
    /// `None` means the element has no children relation at all (a leaf
    /// element, passed through). `Some(vec![])` is a composite with an empty
    /// relation and is still recursed into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// True iff the node is text content (a string or a converted number).
    pub fn is_text_like(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// True iff the node renders nothing at all.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Nullish)
    }

    /// True iff the node is an element with a children relation present,
    /// even an empty one. A leaf element without the relation is not
    /// composite and passes through like an opaque value.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Element(el) if el.children.is_some())
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<bool> for Node {
    fn from(_: bool) -> Self {
        Self::Nullish
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}
