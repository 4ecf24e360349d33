use pagescroll::IntersectionRecord;

use crate::{Easing, MotionConfig};

/// Enter effect of a reveal wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealKind {
    Fade,
    SlideUp,
    Scale,
    /// Container whose children reveal one after another.
    Stagger,
}

impl RevealKind {
    pub fn default_duration_ms(self) -> u64 {
        match self {
            Self::Fade | Self::SlideUp => 600,
            Self::Scale | Self::Stagger => 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealOptions {
    /// Animate on first intersection only, instead of following visibility both ways.
    pub once: bool,
    pub delay_ms: u64,
    /// Overrides the kind's default duration.
    pub duration_ms: Option<u64>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            once: true,
            delay_ms: 0,
            duration_ms: None,
        }
    }
}

/// Visual state a reveal wrapper renders.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl RevealStyle {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTransition {
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

/// Whether a reveal wrapper should be in its shown state.
///
/// With `options.once` the wrapper stays shown after the first intersection; otherwise it
/// follows visibility both ways.
pub fn should_animate(record: IntersectionRecord, options: &RevealOptions) -> bool {
    if options.once {
        record.has_intersected
    } else {
        record.is_intersecting
    }
}

pub fn reveal_style(kind: RevealKind, shown: bool, motion: &MotionConfig) -> RevealStyle {
    if shown {
        return RevealStyle::SHOWN;
    }
    let hidden = RevealStyle {
        opacity: 0.0,
        ..RevealStyle::SHOWN
    };
    match kind {
        RevealKind::Fade => RevealStyle {
            translate_y: if motion.reduced_complexity { 10.0 } else { 20.0 },
            ..hidden
        },
        RevealKind::SlideUp => RevealStyle {
            translate_y: 40.0,
            ..hidden
        },
        RevealKind::Scale => RevealStyle {
            scale: 0.8,
            ..hidden
        },
        RevealKind::Stagger => hidden,
    }
}

/// Timing for a reveal. Disabled motion collapses to an instant, undelayed change.
pub fn reveal_transition(
    kind: RevealKind,
    options: &RevealOptions,
    motion: &MotionConfig,
) -> RevealTransition {
    if !motion.enabled {
        return RevealTransition {
            duration_ms: 0,
            delay_ms: 0,
            easing: Easing::Linear,
        };
    }
    let duration = options.duration_ms.unwrap_or(kind.default_duration_ms());
    RevealTransition {
        duration_ms: motion.scale_duration(duration),
        delay_ms: options.delay_ms.saturating_add(motion.delay_ms),
        easing: Easing::EaseOutQuad,
    }
}

/// Delay for the `index`-th child of a [`RevealKind::Stagger`] container.
pub fn stagger_delay_ms(index: usize, stagger_ms: u64) -> u64 {
    stagger_ms.saturating_mul(index as u64)
}
