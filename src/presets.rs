use crate::{
    error::{StaggerError, StaggerResult},
    motion::{CustomMotion, FamilyMotion, MotionConfig},
};

/// Caller-supplied motion input: either an ordered list of preset names or an
/// explicit configuration. The two are mutually exclusive by construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MotionSpec {
    Presets(Vec<String>),
    Motion(MotionConfig),
}

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &[
    "fade-in",
    "fade-out",
    "slide-up",
    "slide-down",
    "slide-left",
    "slide-right",
    "scale-up",
    "scale-down",
    "rotate-cw",
    "rotate-ccw",
    "bounce-in",
    "elastic-in",
    "flip-x",
    "flip-y",
    "pop-in",
    "typewriter",
];

fn family(variant: &str, duration: f64, delay: f64) -> Option<FamilyMotion> {
    Some(FamilyMotion {
        variant: variant.to_owned(),
        duration,
        delay,
        easing: None,
        extra: Default::default(),
    })
}

/// Looks up a named preset in the fixed table. The table is defined once in
/// code and never mutated at runtime.
pub fn preset(name: &str) -> Option<MotionConfig> {
    let config = match name {
        "fade-in" => MotionConfig {
            fade: family("in", 1.0, 0.2),
            ..Default::default()
        },
        "fade-out" => MotionConfig {
            fade: family("out", 1.0, 0.2),
            ..Default::default()
        },
        "slide-up" => MotionConfig {
            slide: family("up", 0.8, 0.1),
            ..Default::default()
        },
        "slide-down" => MotionConfig {
            slide: family("down", 0.8, 0.1),
            ..Default::default()
        },
        "slide-left" => MotionConfig {
            slide: family("left", 0.8, 0.1),
            ..Default::default()
        },
        "slide-right" => MotionConfig {
            slide: family("right", 0.8, 0.1),
            ..Default::default()
        },
        "scale-up" => MotionConfig {
            scale: family("up", 0.7, 0.1),
            ..Default::default()
        },
        "scale-down" => MotionConfig {
            scale: family("down", 0.7, 0.1),
            ..Default::default()
        },
        "rotate-cw" => MotionConfig {
            rotate: family("cw", 0.8, 0.12),
            ..Default::default()
        },
        "rotate-ccw" => MotionConfig {
            rotate: family("ccw", 0.8, 0.12),
            ..Default::default()
        },
        "bounce-in" => MotionConfig {
            bounce: family("in", 0.9, 0.15),
            ..Default::default()
        },
        "elastic-in" => MotionConfig {
            elastic: family("in", 1.2, 0.15),
            ..Default::default()
        },
        "flip-x" => MotionConfig {
            flip: family("x", 0.8, 0.12),
            ..Default::default()
        },
        "flip-y" => MotionConfig {
            flip: family("y", 0.8, 0.12),
            ..Default::default()
        },
        "pop-in" => MotionConfig {
            fade: family("in", 0.4, 0.08),
            scale: family("up", 0.4, 0.08),
            ..Default::default()
        },
        "typewriter" => MotionConfig {
            custom: Some(CustomMotion {
                name: "typewriter-reveal".to_owned(),
                duration: 0.01,
                delay: 0.08,
                easing: Some("step-end".to_owned()),
            }),
            ..Default::default()
        },
        _ => return None,
    };
    Some(config)
}

/// Resolves caller motion input into one owned [`MotionConfig`].
///
/// Presets fold left-to-right from the empty config, later entries
/// overwriting same-family slots; an unknown name fails the whole resolution
/// with [`StaggerError::InvalidPreset`]. An explicit configuration is cloned,
/// never aliased. No input yields the empty config.
pub fn resolve_motion(spec: Option<&MotionSpec>) -> StaggerResult<MotionConfig> {
    match spec {
        None => Ok(MotionConfig::default()),
        Some(MotionSpec::Motion(m)) => Ok(m.clone()),
        Some(MotionSpec::Presets(names)) => {
            let mut resolved = MotionConfig::default();
            for name in names {
                let entry = preset(name).ok_or_else(|| StaggerError::invalid_preset(name))?;
                resolved.merge_from(&entry);
            }
            tracing::debug!(presets = names.len(), "resolved motion from presets");
            Ok(resolved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_resolves() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some(), "missing preset '{name}'");
        }
    }

    #[test]
    fn unknown_preset_fails_resolution() {
        let spec = MotionSpec::Presets(vec!["invalid-name".to_owned()]);
        let err = resolve_motion(Some(&spec)).unwrap_err();
        assert!(matches!(err, StaggerError::InvalidPreset(name) if name == "invalid-name"));
    }

    #[test]
    fn duplicate_presets_merge_idempotently() {
        let once = resolve_motion(Some(&MotionSpec::Presets(vec!["fade-in".to_owned()]))).unwrap();
        let twice = resolve_motion(Some(&MotionSpec::Presets(vec![
            "fade-in".to_owned(),
            "fade-in".to_owned(),
        ])))
        .unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_presets_both_land() {
        let spec = MotionSpec::Presets(vec!["fade-in".to_owned(), "slide-up".to_owned()]);
        let resolved = resolve_motion(Some(&spec)).unwrap();
        assert_eq!(resolved.fade, preset("fade-in").unwrap().fade);
        assert_eq!(resolved.slide, preset("slide-up").unwrap().slide);
    }

    #[test]
    fn later_preset_wins_on_collision() {
        let spec = MotionSpec::Presets(vec!["slide-up".to_owned(), "slide-down".to_owned()]);
        let resolved = resolve_motion(Some(&spec)).unwrap();
        assert_eq!(resolved.slide.unwrap().variant, "down");
    }

    #[test]
    fn explicit_motion_is_returned_owned() {
        let motion = preset("fade-in").unwrap();
        let resolved = resolve_motion(Some(&MotionSpec::Motion(motion.clone()))).unwrap();
        assert_eq!(resolved, motion);
    }

    #[test]
    fn no_input_resolves_to_empty() {
        assert!(resolve_motion(None).unwrap().is_empty());
        let empty = MotionSpec::Motion(MotionConfig::default());
        assert!(resolve_motion(Some(&empty)).unwrap().is_empty());
    }

    #[test]
    fn motion_spec_json_shapes() {
        let presets: MotionSpec = serde_json::from_str(r#"["fade-in", "slide-up"]"#).unwrap();
        assert!(matches!(presets, MotionSpec::Presets(ref v) if v.len() == 2));

        let motion: MotionSpec =
            serde_json::from_str(r#"{"fade": {"variant": "in", "duration": 1, "delay": 0.2}}"#)
                .unwrap();
        assert!(matches!(motion, MotionSpec::Motion(_)));
    }
}
