use serde::{Deserialize, Serialize};

/// Default shimmer sweep duration.
pub const DEFAULT_SPEED: &str = "1.5s";

/// Default gradient stop colors: edge, highlight, edge.
pub const DEFAULT_COLORS: [&str; 3] = ["#e0e0e0", "#f0f0f0", "#e0e0e0"];

/// Easing identifiers accepted for the shimmer animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timing {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "ease")]
    Ease,
    #[serde(rename = "ease-in")]
    EaseIn,
    #[serde(rename = "ease-out")]
    EaseOut,
    #[serde(rename = "ease-in-out")]
    EaseInOut,
    #[serde(rename = "step-start")]
    StepStart,
    #[serde(rename = "step-end")]
    StepEnd,
    #[serde(rename = "steps(1,start)")]
    StepsStart,
    #[serde(rename = "steps(1,end)")]
    StepsEnd,
    #[serde(rename = "cubic-bezier")]
    CubicBezier,
}

/// All accepted easings in display order.
pub const ALL_TIMINGS: &[Timing] = &[
    Timing::Linear,
    Timing::Ease,
    Timing::EaseIn,
    Timing::EaseOut,
    Timing::EaseInOut,
    Timing::StepStart,
    Timing::StepEnd,
    Timing::StepsStart,
    Timing::StepsEnd,
    Timing::CubicBezier,
];

impl Timing {
    /// CSS identifier emitted into the style block.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timing::Linear => "linear",
            Timing::Ease => "ease",
            Timing::EaseIn => "ease-in",
            Timing::EaseOut => "ease-out",
            Timing::EaseInOut => "ease-in-out",
            Timing::StepStart => "step-start",
            Timing::StepEnd => "step-end",
            Timing::StepsStart => "steps(1,start)",
            Timing::StepsEnd => "steps(1,end)",
            Timing::CubicBezier => "cubic-bezier",
        }
    }

    /// Parse a timing key, falling back to linear.
    pub fn from_key(s: &str) -> Self {
        match s {
            "ease" => Timing::Ease,
            "ease-in" => Timing::EaseIn,
            "ease-out" => Timing::EaseOut,
            "ease-in-out" => Timing::EaseInOut,
            "step-start" => Timing::StepStart,
            "step-end" => Timing::StepEnd,
            "steps(1,start)" => Timing::StepsStart,
            "steps(1,end)" => Timing::StepsEnd,
            "cubic-bezier" => Timing::CubicBezier,
            _ => Timing::Linear,
        }
    }
}

/// Fully resolved shimmer animation settings for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// CSS duration of one shimmer sweep.
    pub speed: String,
    /// Easing applied to the sweep.
    pub timing: Timing,
    /// Gradient stops placed at 25%, 50% and 75%.
    pub colors: [String; 3],
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED.to_string(),
            timing: Timing::default(),
            colors: DEFAULT_COLORS.map(String::from),
        }
    }
}

/// Caller-supplied animation overrides.
///
/// Unset fields fall back to the documented defaults when resolved.
/// Values are carried verbatim into the style block; nothing here is
/// validated at runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<[String; 3]>,
}

impl AnimationOverrides {
    /// Merge these overrides over the defaults.
    pub fn resolve(&self) -> AnimationConfig {
        let base = AnimationConfig::default();
        AnimationConfig {
            speed: self.speed.clone().unwrap_or(base.speed),
            timing: self.timing.unwrap_or(base.timing),
            colors: self.colors.clone().unwrap_or(base.colors),
        }
    }
}
