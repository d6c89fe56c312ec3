use std::collections::BTreeMap;

/// The standard animation families, in the order the style generator emits
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Fade,
    Slide,
    Scale,
    Rotate,
    Bounce,
    Elastic,
    Flip,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::Fade,
        Family::Slide,
        Family::Scale,
        Family::Rotate,
        Family::Bounce,
        Family::Elastic,
        Family::Flip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Bounce => "bounce",
            Self::Elastic => "elastic",
            Self::Flip => "flip",
        }
    }
}

/// Per-family animation descriptor.
///
/// Fields beyond the standard four land in `extra` and are exposed to the
/// host as `--{family}-{key}` custom properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FamilyMotion {
    pub variant: String,
    /// Animation duration in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Delay added per sequence step, in seconds.
    #[serde(default)]
    pub delay: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Descriptor for the reserved `custom` family: `name` is used verbatim as
/// the animation identifier, with no family prefixing.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CustomMotion {
    pub name: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

/// A normalized motion configuration: one optional descriptor per family.
///
/// Families iterate in declared order (fade, slide, scale, rotate, bounce,
/// elastic, flip, then custom). Absent families stay absent; no defaults are
/// synthesized for them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip: Option<FamilyMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomMotion>,
}

impl MotionConfig {
    pub fn is_empty(&self) -> bool {
        self.custom.is_none() && Family::ALL.iter().all(|&f| self.family(f).is_none())
    }

    pub fn family(&self, family: Family) -> Option<&FamilyMotion> {
        match family {
            Family::Fade => self.fade.as_ref(),
            Family::Slide => self.slide.as_ref(),
            Family::Scale => self.scale.as_ref(),
            Family::Rotate => self.rotate.as_ref(),
            Family::Bounce => self.bounce.as_ref(),
            Family::Elastic => self.elastic.as_ref(),
            Family::Flip => self.flip.as_ref(),
        }
    }

    fn family_mut(&mut self, family: Family) -> &mut Option<FamilyMotion> {
        match family {
            Family::Fade => &mut self.fade,
            Family::Slide => &mut self.slide,
            Family::Scale => &mut self.scale,
            Family::Rotate => &mut self.rotate,
            Family::Bounce => &mut self.bounce,
            Family::Elastic => &mut self.elastic,
            Family::Flip => &mut self.flip,
        }
    }

    /// Present standard families with their descriptors, in family order.
    pub fn families(&self) -> impl Iterator<Item = (Family, &FamilyMotion)> {
        Family::ALL
            .iter()
            .filter_map(|&f| self.family(f).map(|m| (f, m)))
    }

    /// Shallow merge: every family slot present on `other` replaces the whole
    /// slot here. Later merges win on collision.
    pub fn merge_from(&mut self, other: &MotionConfig) {
        for family in Family::ALL {
            if let Some(m) = other.family(family) {
                *self.family_mut(family) = Some(m.clone());
            }
        }
        if let Some(c) = &other.custom {
            self.custom = Some(c.clone());
        }
    }
}
