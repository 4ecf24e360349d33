use crate::RootMargin;

/// Debounce window after which a quiet page is no longer "scrolling".
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;
/// Minimum wall-clock spacing between active-section recomputations.
pub const DEFAULT_SECTION_THROTTLE_MS: u64 = 100;
/// Fixed-header compensation added to the scroll offset when picking the active section.
pub const DEFAULT_NAV_OFFSET: f64 = 100.0;
pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN_PX: f64 = 50.0;

/// Configuration for [`crate::ScrollTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerOptions {
    /// Debounced duration for resetting `is_scrolling` once samples stop arriving.
    pub is_scrolling_reset_delay_ms: u64,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        }
    }
}

impl TrackerOptions {
    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

/// Configuration for [`crate::VisibilityObserver`].
///
/// The defaults (`threshold = 0.1`, `root_margin = 50px`) report elements slightly before they
/// physically enter the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObserverOptions {
    /// Fraction of the element (0..=1) that must overlap the root to count as intersecting.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::px(DEFAULT_ROOT_MARGIN_PX),
        }
    }
}

impl ObserverOptions {
    /// Out-of-range values are clamped to `0..=1`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

pub(crate) fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        pwarn!("ObserverOptions: NaN threshold, using 0");
        return 0.0;
    }
    threshold.clamp(0.0, 1.0)
}

/// Configuration for [`crate::SectionResolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverOptions {
    pub throttle_ms: u64,
    pub nav_offset: f64,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_SECTION_THROTTLE_MS,
            nav_offset: DEFAULT_NAV_OFFSET,
        }
    }
}

impl ResolverOptions {
    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_nav_offset(mut self, nav_offset: f64) -> Self {
        self.nav_offset = nav_offset;
        self
    }
}
