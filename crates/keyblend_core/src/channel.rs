use glam::Vec3;

use crate::transform::LocalTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    #[must_use]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    fn from_suffix(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Axis::X),
            'Y' | 'y' => Some(Axis::Y),
            'Z' | 'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

/// What an animated channel drives, and therefore how it is tweened.
///
/// Transform channels are blended in world space and read back from the
/// local decomposition; everything else is a plain scalar lerp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Translate(Axis),
    Rotate(Axis),
    Scale(Axis),
    Other,
}

impl ChannelKind {
    /// Classifies a scalar attribute by its long (`translateX`) or short
    /// (`tx`) name. Compound attributes (`translate`) are not channels.
    #[must_use]
    pub fn from_attribute_name(name: &str) -> Self {
        let Some(last) = name.chars().last() else {
            return ChannelKind::Other;
        };
        let Some(axis) = Axis::from_suffix(last) else {
            return ChannelKind::Other;
        };
        let stem = &name[..name.len() - last.len_utf8()];

        match stem {
            "translate" | "t" => ChannelKind::Translate(axis),
            "rotate" | "r" => ChannelKind::Rotate(axis),
            "scale" | "s" => ChannelKind::Scale(axis),
            _ => ChannelKind::Other,
        }
    }

    /// Classifies a curve named `<node>_<attribute>`, e.g. `pCube1_rotateY`.
    /// A numeric suffix added to keep curve names unique (`pCube1_rotateY1`)
    /// is ignored.
    #[must_use]
    pub fn from_curve_name(name: &str) -> Self {
        let attribute = name.rsplit('_').next().unwrap_or(name);
        Self::from_attribute_name(attribute.trim_end_matches(|c: char| c.is_ascii_digit()))
    }

    #[inline]
    #[must_use]
    pub fn is_transform(self) -> bool {
        !matches!(self, ChannelKind::Other)
    }

    /// The value this channel takes from a decomposed local transform.
    /// `None` for [`ChannelKind::Other`].
    #[must_use]
    pub fn pick(self, local: &LocalTransform) -> Option<f32> {
        match self {
            ChannelKind::Translate(axis) => Some(axis.component(local.translation)),
            ChannelKind::Rotate(axis) => Some(axis.component(local.rotation)),
            ChannelKind::Scale(axis) => Some(axis.component(local.scale)),
            ChannelKind::Other => None,
        }
    }

    /// Rest value of the channel: `1` for scale, `0` otherwise.
    #[must_use]
    pub fn rest_value(self) -> f32 {
        match self {
            ChannelKind::Scale(_) => 1.0,
            _ => 0.0,
        }
    }
}

/// True for any attribute that moves a transform, including compounds.
#[must_use]
pub fn is_transform_plug(name: &str) -> bool {
    matches!(
        name,
        "t" | "r" | "s" | "translate" | "rotate" | "scale"
    ) || ChannelKind::from_attribute_name(name).is_transform()
}
