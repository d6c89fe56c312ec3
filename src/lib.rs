//! Stagger is a pure staggered-text-animation engine: it splits a renderable
//! content tree into characters, words, or lines, assigns each fragment a
//! position in one global animation sequence, and computes per-fragment CSS
//! animation plans from a declarative motion configuration. A hosting UI
//! layer mounts the output and wires visibility triggers and animation-end
//! events.
#![forbid(unsafe_code)]

pub mod dsl;
pub mod error;
pub mod motion;
pub mod node;
pub mod pipeline;
pub mod presets;
pub mod sequence;
pub mod split;
pub mod style;
pub mod tree;
pub mod validate;

pub use dsl::{ElementBuilder, fragment, text};
pub use error::{StaggerError, StaggerResult};
pub use motion::{CustomMotion, Family, FamilyMotion, MotionConfig};
pub use node::{Element, Node};
pub use pipeline::{AnimateOptions, Animated, animate};
pub use presets::{MotionSpec, PRESET_NAMES, preset, resolve_motion};
pub use sequence::{
    AnimatedElement, AnimatedNode, AnimatedUnit, OnComplete, SequenceOptions, SequenceOrder,
    sequence,
};
pub use split::{SplitMode, split_text};
pub use style::{DEFAULT_EASING, UnitStyle, unit_style};
pub use tree::{SplitElement, SplitTree, SplitUnit, count_units, split_tree};
pub use validate::{MotionWarning, check_motion};
