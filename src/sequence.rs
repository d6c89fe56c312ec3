use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{
    motion::MotionConfig,
    style::{UnitStyle, unit_style},
    tree::SplitUnit,
};

/// Completion callback handed to exactly one unit per sequencing pass. The
/// host is responsible for invoking it from its animation-end signal with a
/// one-shot guard.
pub type OnComplete = Arc<dyn Fn() + Send + Sync>;

/// Direction of the stagger across the whole tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceOrder {
    #[default]
    FirstToLast,
    LastToFirst,
}

/// One animatable fragment with its computed style. The callback is present
/// on the unit whose sequence index is `total_units - 1`, and on no other.
#[derive(Clone, serde::Serialize)]
pub struct AnimatedUnit {
    pub content: String,
    pub style: UnitStyle,
    #[serde(skip)]
    pub on_complete: Option<OnComplete>,
}

impl fmt::Debug for AnimatedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedUnit")
            .field("content", &self.content)
            .field("style", &self.style)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct AnimatedElement {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AnimatedNode>>,
}

/// The annotated output tree: same nesting and leaf order as the split tree
/// it was produced from.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimatedNode {
    Unit(AnimatedUnit),
    Element(AnimatedElement),
    Opaque(serde_json::Value),
}

pub struct SequenceOptions<'a> {
    pub units: &'a [SplitUnit],
    /// Delay in seconds added to every unit on top of its stagger offset.
    pub initial_delay: f64,
    pub order: SequenceOrder,
    pub motion: &'a MotionConfig,
    /// Must equal `count_units(units)`; the sequencing pass is sized by it.
    pub total_units: usize,
    pub on_complete: Option<OnComplete>,
}

/// Walks a split tree and wraps every text fragment in an [`AnimatedUnit`].
///
/// A single counter is shared across the entire walk: entering an element's
/// children does not reset it, so sequence indices are global document
/// positions. Under [`SequenceOrder::LastToFirst`] the raw position `i` maps
/// to `total_units - i - 1`, which makes the visually-last unit also the one
/// carrying the completion callback under either ordering. The counter lives
/// inside this call; separate passes never observe each other's state.
pub fn sequence(opts: &SequenceOptions<'_>) -> Vec<AnimatedNode> {
    let mut counter = 0usize;
    annotate(opts.units, opts, &mut counter)
}

fn annotate(
    units: &[SplitUnit],
    opts: &SequenceOptions<'_>,
    counter: &mut usize,
) -> Vec<AnimatedNode> {
    units
        .iter()
        .map(|unit| match unit {
            SplitUnit::Text(content) => {
                let raw = *counter;
                *counter += 1;
                let seq = match opts.order {
                    SequenceOrder::FirstToLast => raw,
                    SequenceOrder::LastToFirst => opts.total_units.saturating_sub(raw + 1),
                };
                let is_last = opts.total_units > 0 && seq == opts.total_units - 1;
                AnimatedNode::Unit(AnimatedUnit {
                    content: content.clone(),
                    style: unit_style(opts.motion, seq, opts.initial_delay),
                    on_complete: if is_last {
                        opts.on_complete.clone()
                    } else {
                        None
                    },
                })
            }
            SplitUnit::Element(el) => AnimatedNode::Element(AnimatedElement {
                tag: el.tag.clone(),
                attrs: el.attrs.clone(),
                children: el
                    .children
                    .as_deref()
                    .map(|children| annotate(children, opts, counter)),
            }),
            SplitUnit::Opaque(value) => AnimatedNode::Opaque(value.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        dsl::{fragment, text},
        node::{Element, Node},
        presets::preset,
        split::SplitMode,
        tree::{count_units, split_tree},
    };

    fn units_of(tree: &[AnimatedNode], out: &mut Vec<AnimatedUnit>) {
        for node in tree {
            match node {
                AnimatedNode::Unit(u) => out.push(u.clone()),
                AnimatedNode::Element(el) => {
                    if let Some(children) = &el.children {
                        units_of(children, out);
                    }
                }
                AnimatedNode::Opaque(_) => {}
            }
        }
    }

    fn run(
        content: &Node,
        mode: SplitMode,
        order: SequenceOrder,
        on_complete: Option<OnComplete>,
    ) -> (Vec<AnimatedNode>, Vec<AnimatedUnit>) {
        let tree = split_tree(content, mode);
        let motion = preset("fade-in").unwrap();
        let annotated = sequence(&SequenceOptions {
            units: &tree.units,
            initial_delay: 0.0,
            order,
            motion: &motion,
            total_units: count_units(&tree.units),
            on_complete,
        });
        let mut flat = Vec::new();
        units_of(&annotated, &mut flat);
        (annotated, flat)
    }

    #[test]
    fn two_character_example_delays() {
        let (_, units) = run(
            &text("Hi"),
            SplitMode::Character,
            SequenceOrder::FirstToLast,
            None,
        );
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].style.animation, "fade-in 1s ease-out 0s both");
        assert_eq!(units[1].style.animation, "fade-in 1s ease-out 0.2s both");
    }

    #[test]
    fn counter_is_global_across_nested_elements() {
        // "ab" + <strong>"cd"</strong> + "e": indices 0..=4 in document order,
        // not reset inside the element.
        let content = fragment([
            text("ab"),
            Node::Element(Element {
                tag: "strong".to_owned(),
                attrs: BTreeMap::new(),
                children: Some(vec![text("cd")]),
            }),
            text("e"),
        ]);
        let (_, units) = run(
            &content,
            SplitMode::Character,
            SequenceOrder::FirstToLast,
            None,
        );
        assert_eq!(units.len(), 5);
        let delays: Vec<String> = units
            .iter()
            .map(|u| u.style.animation.split(' ').nth(3).unwrap().to_owned())
            .collect();
        // 3 * 0.2 picks up the usual binary-float dust; it matters only that
        // the progression never resets inside the element.
        assert_eq!(
            delays,
            vec!["0s", "0.2s", "0.4s", "0.6000000000000001s", "0.8s"]
        );
    }

    #[test]
    fn reverse_order_mirrors_indices() {
        let (_, forward) = run(
            &text("abcd"),
            SplitMode::Character,
            SequenceOrder::FirstToLast,
            None,
        );
        let (_, reverse) = run(
            &text("abcd"),
            SplitMode::Character,
            SequenceOrder::LastToFirst,
            None,
        );
        for (i, unit) in reverse.iter().enumerate() {
            assert_eq!(unit.style, forward[forward.len() - i - 1].style);
        }
    }

    #[test]
    fn exactly_one_unit_carries_the_callback() {
        let content = fragment([
            text("ab"),
            Node::Element(Element {
                tag: "em".to_owned(),
                attrs: BTreeMap::new(),
                children: Some(vec![text("cd")]),
            }),
        ]);
        for order in [SequenceOrder::FirstToLast, SequenceOrder::LastToFirst] {
            let fired = Arc::new(AtomicUsize::new(0));
            let counter = fired.clone();
            let cb: OnComplete = Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            let (_, units) = run(&content, SplitMode::Character, order, Some(cb));
            let holders: Vec<usize> = units
                .iter()
                .enumerate()
                .filter(|(_, u)| u.on_complete.is_some())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(holders.len(), 1, "order {order:?}");

            // The holder is the unit whose sequence index is total - 1: the
            // final document position forward, the first one in reverse.
            let expected = match order {
                SequenceOrder::FirstToLast => units.len() - 1,
                SequenceOrder::LastToFirst => 0,
            };
            assert_eq!(holders[0], expected);

            (units[holders[0]].on_complete.as_ref().unwrap())();
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn opaque_nodes_never_advance_or_receive() {
        let cb: OnComplete = Arc::new(|| {});
        let content = fragment([
            text("a"),
            Node::Opaque(serde_json::json!("widget")),
            text("b"),
        ]);
        let (annotated, units) = run(
            &content,
            SplitMode::Character,
            SequenceOrder::FirstToLast,
            Some(cb),
        );
        assert_eq!(annotated.len(), 3);
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].style.animation, "fade-in 1s ease-out 0.2s both");
        assert!(units[1].on_complete.is_some());
        assert!(matches!(&annotated[1], AnimatedNode::Opaque(_)));
    }

    #[test]
    fn count_matches_indices_handed_out() {
        let content = fragment([
            text("one two"),
            Node::Element(Element {
                tag: "span".to_owned(),
                attrs: BTreeMap::new(),
                children: Some(vec![text("three"), Node::Nullish]),
            }),
            Node::Opaque(serde_json::json!(null)),
        ]);
        for mode in [SplitMode::Character, SplitMode::Word, SplitMode::Line] {
            let tree = split_tree(&content, mode);
            let (_, units) = run(&content, mode, SequenceOrder::FirstToLast, None);
            assert_eq!(count_units(&tree.units), units.len());
        }
    }

    #[test]
    fn repeated_passes_are_identical() {
        let content = fragment([text("stable "), text("output")]);
        let (first, _) = run(
            &content,
            SplitMode::Word,
            SequenceOrder::LastToFirst,
            None,
        );
        let (second, _) = run(
            &content,
            SplitMode::Word,
            SequenceOrder::LastToFirst,
            None,
        );
        let a = serde_json::to_value(&first).unwrap();
        let b = serde_json::to_value(&second).unwrap();
        assert_eq!(a, b);
    }
}
