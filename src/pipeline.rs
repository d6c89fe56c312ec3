use crate::{
    error::StaggerResult,
    node::Node,
    presets::{MotionSpec, resolve_motion},
    sequence::{AnimatedNode, OnComplete, SequenceOptions, SequenceOrder, sequence},
    split::SplitMode,
    tree::{count_units, split_tree},
};

/// Options for one full animation pass.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimateOptions {
    #[serde(default)]
    pub split: SplitMode,
    #[serde(default)]
    pub order: SequenceOrder,
    /// Seconds added to every unit's delay.
    #[serde(default)]
    pub initial_delay: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionSpec>,
}

/// Output of [`animate`]: the annotated tree, the extracted text (for the
/// host's accessibility label), and the unit count the pass was sized by.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Animated {
    pub nodes: Vec<AnimatedNode>,
    pub text: String,
    pub total_units: usize,
}

/// Runs the full pipeline over `content`: split, count, resolve motion,
/// sequence.
///
/// Pure and synchronous; identical inputs produce structurally identical
/// output, so hosts may memoize on `(content, options)`. Fails only on an
/// unknown preset name. Whether to animate at all (visibility gating,
/// animate-immediately triggers) is the host's decision; callers that render
/// static content simply skip this call.
#[tracing::instrument(skip(content, on_complete))]
pub fn animate(
    content: &Node,
    options: &AnimateOptions,
    on_complete: Option<OnComplete>,
) -> StaggerResult<Animated> {
    let tree = split_tree(content, options.split);
    let total_units = count_units(&tree.units);
    let motion = resolve_motion(options.motion.as_ref())?;
    tracing::debug!(total_units, text_len = tree.text.len(), "sequencing");

    let nodes = sequence(&SequenceOptions {
        units: &tree.units,
        initial_delay: options.initial_delay,
        order: options.order,
        motion: &motion,
        total_units,
        on_complete,
    });

    Ok(Animated {
        nodes,
        text: tree.text,
        total_units,
    })
}
