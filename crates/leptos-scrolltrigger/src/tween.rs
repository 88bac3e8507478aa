//! Tweens and Eases
//!
//! Pure mapping from timeline progress to style values.

/// Animatable properties
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    /// Vertical translation as a percentage of the element's own height
    YPercent,
    Opacity,
}

impl Property {
    /// Value of the property when the element is untouched
    pub fn natural(self) -> f64 {
        match self {
            Property::YPercent => 0.0,
            Property::Opacity => 1.0,
        }
    }

    /// Inline CSS property written for this value
    pub fn css_name(self) -> &'static str {
        match self {
            Property::YPercent => "transform",
            Property::Opacity => "opacity",
        }
    }

    pub fn css_value(self, value: f64) -> String {
        match self {
            Property::YPercent => format!("translateY({}%)", value),
            Property::Opacity => value.to_string(),
        }
    }
}

/// Easing curves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// Linear
    #[default]
    None,
    Power1In,
    Power1Out,
    Power1InOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1In => t * t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Property values given to `Tween::from_vars` / `Tween::to_vars`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenVars {
    pub y_percent: Option<f64>,
    pub opacity: Option<f64>,
}

impl TweenVars {
    fn entries(&self) -> impl Iterator<Item = (Property, f64)> {
        [
            self.y_percent.map(|v| (Property::YPercent, v)),
            self.opacity.map(|v| (Property::Opacity, v)),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    property: Property,
    from: f64,
    to: f64,
}

/// Style values at one point of a tween; `None` means "not animated"
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleState {
    pub y_percent: Option<f64>,
    pub opacity: Option<f64>,
}

impl StyleState {
    /// Inline declarations to write, one per animated property
    pub fn css(&self) -> Vec<(&'static str, String)> {
        [
            self.y_percent.map(|v| (Property::YPercent, v)),
            self.opacity.map(|v| (Property::Opacity, v)),
        ]
        .into_iter()
        .flatten()
        .map(|(p, v)| (p.css_name(), p.css_value(v)))
        .collect()
    }
}

/// Interpolation between two style states
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    tracks: Vec<Track>,
    ease: Ease,
}

impl Tween {
    /// Animate from `vars` to the natural state
    pub fn from_vars(vars: TweenVars) -> Self {
        Self {
            tracks: vars
                .entries()
                .map(|(property, v)| Track { property, from: v, to: property.natural() })
                .collect(),
            ease: Ease::None,
        }
    }

    /// Animate from the natural state to `vars`
    pub fn to_vars(vars: TweenVars) -> Self {
        Self {
            tracks: vars
                .entries()
                .map(|(property, v)| Track { property, from: property.natural(), to: v })
                .collect(),
            ease: Ease::None,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Properties this tween writes
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.tracks.iter().map(|t| t.property)
    }

    pub fn state_at(&self, progress: f64) -> StyleState {
        let t = self.ease.apply(progress);
        let mut state = StyleState::default();
        for track in &self.tracks {
            let value = track.from + (track.to - track.from) * t;
            match track.property {
                Property::YPercent => state.y_percent = Some(value),
                Property::Opacity => state.opacity = Some(value),
            }
        }
        state
    }
}
