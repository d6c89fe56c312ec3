use crate::motion::MotionConfig;

/// A developer-facing problem in a motion configuration.
///
/// Warnings never block style generation; the generator stays best-effort on
/// malformed descriptors. Hosts decide how loud to be about them (a dev
/// build might panic, production might log).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MotionWarning {
    pub family: String,
    pub message: String,
}

impl MotionWarning {
    fn new(family: &str, message: impl Into<String>) -> Self {
        Self {
            family: family.to_owned(),
            message: message.into(),
        }
    }
}

const RESERVED_KEYS: [&str; 5] = ["variant", "duration", "delay", "easing", "name"];

/// Collects every problem in `motion` instead of stopping at the first one.
pub fn check_motion(motion: &MotionConfig) -> Vec<MotionWarning> {
    let mut warnings = Vec::new();

    for (family, m) in motion.families() {
        let name = family.as_str();
        if m.variant.trim().is_empty() {
            warnings.push(MotionWarning::new(name, "variant must be non-empty"));
        }
        if m.duration <= 0.0 || !m.duration.is_finite() {
            warnings.push(MotionWarning::new(
                name,
                format!("duration must be a positive number of seconds, got {}", m.duration),
            ));
        }
        if m.delay < 0.0 || !m.delay.is_finite() {
            warnings.push(MotionWarning::new(
                name,
                format!("per-step delay must be >= 0 seconds, got {}", m.delay),
            ));
        }
        for key in m.extra.keys() {
            if RESERVED_KEYS.contains(&key.as_str()) {
                warnings.push(MotionWarning::new(
                    name,
                    format!("extra field '{key}' shadows a reserved descriptor field"),
                ));
            }
        }
    }

    if let Some(c) = &motion.custom {
        if c.name.trim().is_empty() {
            warnings.push(MotionWarning::new("custom", "name must be non-empty"));
        }
        if c.duration <= 0.0 || !c.duration.is_finite() {
            warnings.push(MotionWarning::new(
                "custom",
                format!("duration must be a positive number of seconds, got {}", c.duration),
            ));
        }
        if c.delay < 0.0 || !c.delay.is_finite() {
            warnings.push(MotionWarning::new(
                "custom",
                format!("per-step delay must be >= 0 seconds, got {}", c.delay),
            ));
        }
    }

    warnings
}
