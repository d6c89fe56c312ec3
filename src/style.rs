use smallvec::SmallVec;

use crate::motion::MotionConfig;

/// Easing applied when a descriptor omits one.
pub const DEFAULT_EASING: &str = "ease-out";

/// The computed style contract for one animated unit: a single CSS
/// `animation` value plus any custom properties carried from descriptor
/// `extra` fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct UnitStyle {
    pub animation: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_props: Vec<(String, String)>,
}

/// Computes the style for the unit at `sequence_index`.
///
/// One descriptor string per configured family, in family order:
/// `"{id} {duration}s {easing} {delay}s both"` with
/// `delay = sequence_index * family.delay + initial_delay`. Standard families
/// use the `{family}-{variant}` identifier and expand `extra` fields into
/// `--{family}-{key}` custom properties; the custom family uses its `name`
/// verbatim. Zero configured families yield an empty `animation` value.
///
/// Always best-effort: technically invalid descriptors (non-positive
/// duration, negative delay) still format. Rejection is the caller's
/// business, surfaced separately by [`crate::validate::check_motion`].
pub fn unit_style(motion: &MotionConfig, sequence_index: usize, initial_delay: f64) -> UnitStyle {
    let mut specs: SmallVec<[String; 4]> = SmallVec::new();
    let mut custom_props = Vec::new();

    for (family, m) in motion.families() {
        let delay = sequence_index as f64 * m.delay + initial_delay;
        let easing = m.easing.as_deref().unwrap_or(DEFAULT_EASING);
        specs.push(format!(
            "{family}-{variant} {duration}s {easing} {delay}s both",
            family = family.as_str(),
            variant = m.variant,
            duration = m.duration,
        ));
        for (key, value) in &m.extra {
            custom_props.push((format!("--{}-{}", family.as_str(), key), css_value(value)));
        }
    }

    if let Some(c) = &motion.custom {
        let delay = sequence_index as f64 * c.delay + initial_delay;
        let easing = c.easing.as_deref().unwrap_or(DEFAULT_EASING);
        specs.push(format!(
            "{name} {duration}s {easing} {delay}s both",
            name = c.name,
            duration = c.duration,
        ));
    }

    UnitStyle {
        animation: specs.join(", "),
        custom_props,
    }
}

fn css_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
