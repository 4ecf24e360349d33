use crate::Easing;

/// Fixed-header height subtracted from every scroll-to destination.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

pub const CUBIC_DURATION_MS: u64 = 800;
pub const QUARTIC_DURATION_MS: u64 = 600;
pub const EXPONENTIAL_DURATION_MS: u64 = 400;

/// Resolves a selector to the target element's top edge, relative to the viewport (what a
/// bounding-rect query reports).
///
/// Closures of the form `FnMut(&str) -> Option<f64>` implement this trait.
pub trait TargetLookup {
    fn viewport_top(&mut self, selector: &str) -> Option<f64>;
}

impl<F: FnMut(&str) -> Option<f64>> TargetLookup for F {
    fn viewport_top(&mut self, selector: &str) -> Option<f64> {
        self(selector)
    }
}

/// `viewport_top + current_offset - header_offset`, never above the document start.
pub fn target_offset(viewport_top: f64, current_offset: f64, header_offset: f64) -> f64 {
    (viewport_top + current_offset - header_offset).max(0.0)
}

/// Looks up `selector` and computes its scroll destination.
///
/// Returns `None` (and logs a warning) when nothing matches.
pub fn resolve_target(
    lookup: &mut impl TargetLookup,
    selector: &str,
    current_offset: f64,
    header_offset: f64,
) -> Option<f64> {
    let Some(top) = lookup.viewport_top(selector) else {
        pwarn!(selector, "scroll target not found");
        return None;
    };
    Some(target_offset(top, current_offset, header_offset))
}

/// How the platform should perform a native scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The scroll-to strategies offered by [`crate::ScrollEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollVariant {
    /// Platform smooth scrolling; the default for navigation links.
    #[default]
    NativeSmooth,
    /// Slow ease-in-out transition (600–800ms).
    EasedCubic { duration_ms: u64 },
    /// Fast start with a soft landing.
    EasedQuartic,
    /// Near-instant feel.
    EasedExponential,
    /// Platform instant jump without a custom frame loop; the default for primary CTAs.
    InstantNative,
}

impl ScrollVariant {
    pub fn eased_cubic() -> Self {
        Self::EasedCubic {
            duration_ms: CUBIC_DURATION_MS,
        }
    }

    /// Duration and curve for variants that run their own frame loop.
    pub fn animation(self) -> Option<(u64, Easing)> {
        match self {
            Self::EasedCubic { duration_ms } => Some((duration_ms, Easing::EaseInOutCubic)),
            Self::EasedQuartic => Some((QUARTIC_DURATION_MS, Easing::EaseOutQuart)),
            Self::EasedExponential => Some((EXPONENTIAL_DURATION_MS, Easing::EaseOutExpo)),
            Self::NativeSmooth | Self::InstantNative => None,
        }
    }

    pub fn native_behavior(self) -> Option<ScrollBehavior> {
        match self {
            Self::NativeSmooth => Some(ScrollBehavior::Smooth),
            Self::InstantNative => Some(ScrollBehavior::Instant),
            _ => None,
        }
    }
}

/// What the adapter has to do after a scroll-to request.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollCommand {
    /// Hand the destination to the platform scroll API.
    Native { top: f64, behavior: ScrollBehavior },
    /// A tween was started; drive it with `ScrollEngine::tick` on every animation frame.
    Animate { from: f64, to: f64 },
}

impl ScrollCommand {
    pub fn destination(&self) -> f64 {
        match *self {
            Self::Native { top, .. } => top,
            Self::Animate { to, .. } => to,
        }
    }
}
