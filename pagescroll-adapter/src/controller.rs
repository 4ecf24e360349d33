use pagescroll::{
    CacheKey, ResolverOptions, ScrollState, ScrollTracker, SectionGeometry, SectionResolver,
    TrackerOptions,
};

use crate::{ScrollCommand, ScrollEngine, ScrollVariant, TargetLookup};

/// A framework-neutral controller that wires the scroll tracker, the active-section resolver
/// and the smooth-scroll engine together for one page.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll_event` for raw scroll events (request a frame when it returns `true`)
/// - `on_animation_frame` from that frame, with the live offset and a section geometry query
/// - `tick(now_ms, geometry_of)` each frame/timer tick (tween offsets, `is_scrolling`
///   debouncing and the settle-time section check)
/// - `on_resize` and `on_user_input` when the viewport changes or the user takes over
///
/// Offsets returned from `tick()` are meant to be written to the real scroll position; the
/// resulting scroll events flow back through `on_scroll_event`.
#[derive(Debug)]
pub struct PageController<K> {
    tracker: ScrollTracker,
    sections: SectionResolver<K>,
    engine: ScrollEngine,
}

impl<K: CacheKey + Clone> PageController<K> {
    pub fn new(sections: impl IntoIterator<Item = K>, initial_offset: f64) -> Self {
        Self::from_parts(
            ScrollTracker::new(TrackerOptions::default(), initial_offset),
            SectionResolver::new(ResolverOptions::default(), sections),
            ScrollEngine::new(),
        )
    }

    pub fn from_parts(
        tracker: ScrollTracker,
        sections: SectionResolver<K>,
        engine: ScrollEngine,
    ) -> Self {
        Self {
            tracker,
            sections,
            engine,
        }
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ScrollTracker {
        &mut self.tracker
    }

    pub fn sections(&self) -> &SectionResolver<K> {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionResolver<K> {
        &mut self.sections
    }

    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ScrollEngine {
        &mut self.engine
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    pub fn active_section(&self) -> Option<&K> {
        self.sections.active()
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.tracker.state().back_to_top_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    pub fn on_scroll_event(&mut self) -> bool {
        self.tracker.on_scroll_event()
    }

    /// Commits the frame's scroll sample and, if it changed the state, re-resolves the active
    /// section (subject to the resolver's throttle).
    ///
    /// Returns `true` when a scroll state change was committed.
    pub fn on_animation_frame(
        &mut self,
        offset: f64,
        now_ms: u64,
        geometry_of: impl FnMut(&K) -> Option<SectionGeometry>,
    ) -> bool {
        if !self.tracker.on_animation_frame(offset, now_ms) {
            return false;
        }
        self.sections.resolve(self.tracker.offset(), now_ms, geometry_of);
        true
    }

    /// Re-resolves the active section from the last committed offset.
    pub fn resolve_active(
        &mut self,
        now_ms: u64,
        geometry_of: impl FnMut(&K) -> Option<SectionGeometry>,
    ) -> Option<&K> {
        self.sections.resolve(self.tracker.offset(), now_ms, geometry_of)
    }

    pub fn on_resize(&mut self) {
        self.sections.on_resize();
    }

    /// Call this on wheel/touch/key input: the user's scroll wins over a running tween.
    pub fn on_user_input(&mut self) {
        self.engine.cancel();
    }

    /// Advances the controller.
    ///
    /// - If a tween is active, returns the offset to write to the scroll container.
    /// - Always runs `is_scrolling` debouncing. When scrolling settles, the active section is
    ///   resolved once more so a final frame that fell inside the resolver's throttle window
    ///   is not lost.
    pub fn tick(
        &mut self,
        now_ms: u64,
        geometry_of: impl FnMut(&K) -> Option<SectionGeometry>,
    ) -> Option<f64> {
        if self.tracker.tick(now_ms) {
            self.sections.resolve(self.tracker.offset(), now_ms, geometry_of);
        }
        self.engine.tick(now_ms)
    }

    /// Starts a scroll to the element matched by `selector`.
    ///
    /// `current_offset` must be the live scroll offset (the same coordinate space the lookup's
    /// viewport-relative tops are measured in).
    pub fn scroll_to(
        &mut self,
        selector: &str,
        variant: ScrollVariant,
        current_offset: f64,
        lookup: &mut impl TargetLookup,
    ) -> Option<ScrollCommand> {
        self.engine.scroll_to(selector, variant, current_offset, lookup)
    }

    pub fn scroll_to_top(&mut self, variant: ScrollVariant) -> ScrollCommand {
        let current = self.tracker.offset();
        self.engine.scroll_to_top(variant, current)
    }

    /// Tears down listeners and any running animation.
    pub fn detach(&mut self) {
        self.engine.cancel();
        self.tracker.detach();
    }
}
