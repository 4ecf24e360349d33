use core::fmt;

use crate::key::{CacheKey, KeyMap};
use crate::options::clamp_threshold;
use crate::{ElementRect, IntersectionRecord, ObserverOptions, RootMargin, Viewport};

/// Vertical bounds of the intersection root: the viewport grown by the root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RootBounds {
    pub fn new(viewport: Viewport, margin: &RootMargin) -> Self {
        Self {
            top: viewport.scroll_offset - margin.top.resolve(viewport.height),
            bottom: viewport.bottom() + margin.bottom.resolve(viewport.height),
        }
    }
}

/// Fraction of `rect` that lies inside `root`, in `0.0..=1.0`.
///
/// A zero-height element counts as fully visible when it sits inside the root.
pub fn intersection_ratio(rect: ElementRect, root: RootBounds) -> f64 {
    if rect.height <= 0.0 {
        return if rect.top >= root.top && rect.top <= root.bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = rect.bottom().min(root.bottom) - rect.top.max(root.top);
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Intersection test used by [`VisibilityObserver`].
///
/// With a zero threshold, edge-adjacent elements count as intersecting; otherwise the overlap
/// ratio must be positive and reach the threshold.
pub fn is_intersecting(rect: ElementRect, root: RootBounds, threshold: f64) -> bool {
    if threshold <= 0.0 {
        return rect.top <= root.bottom && rect.bottom() >= root.top;
    }
    let ratio = intersection_ratio(rect, root);
    ratio > 0.0 && ratio >= threshold
}

/// `true` when `rect` lies entirely within the viewport (no margin).
pub fn is_fully_in_viewport(rect: ElementRect, viewport: Viewport) -> bool {
    rect.top >= viewport.scroll_offset && rect.bottom() <= viewport.bottom()
}

#[derive(Clone, Copy, Debug)]
struct Observed {
    rect: ElementRect,
    record: IntersectionRecord,
    once: bool,
}

/// Per-element viewport intersection tracking.
///
/// Each observed element carries a live `is_intersecting` flag plus a latched
/// `has_intersected` flag used to gate "animate once" reveals. Elements are evaluated as soon
/// as they are observed, so one that starts on screen is reported without any scrolling.
#[derive(Clone)]
pub struct VisibilityObserver<K> {
    options: ObserverOptions,
    elements: KeyMap<K, Observed>,
}

impl<K: CacheKey> VisibilityObserver<K> {
    pub fn new(mut options: ObserverOptions) -> Self {
        options.threshold = clamp_threshold(options.threshold);
        Self {
            options,
            elements: KeyMap::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.elements.contains_key(key)
    }

    pub fn record(&self, key: &K) -> Option<IntersectionRecord> {
        self.elements.get(key).map(|o| o.record)
    }

    /// Starts observing `key` and returns its initial record.
    ///
    /// Observing an already-observed key replaces its geometry but keeps its latched
    /// `has_intersected`.
    pub fn observe(&mut self, key: K, rect: ElementRect, viewport: Viewport) -> IntersectionRecord {
        self.insert(key, rect, viewport, false)
    }

    /// Observes `key` until its first intersection, then drops it.
    ///
    /// This is the lazy-load pattern: the returned record (or the one reported through
    /// `on_viewport_change`) with `is_intersecting == true` is the last one for this key.
    pub fn observe_once(
        &mut self,
        key: K,
        rect: ElementRect,
        viewport: Viewport,
    ) -> IntersectionRecord {
        let record = self.insert(key, rect, viewport, true);
        if record.is_intersecting {
            self.elements.retain(|_, o| !(o.once && o.record.is_intersecting));
        }
        record
    }

    /// Stops observing `key`. Its latched state is discarded.
    pub fn unobserve(&mut self, key: &K) -> bool {
        self.elements.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Re-evaluates one element after its geometry changed.
    ///
    /// Returns `None` if `key` is not observed.
    pub fn update_element(
        &mut self,
        key: &K,
        rect: ElementRect,
        viewport: Viewport,
    ) -> Option<IntersectionRecord> {
        let root = RootBounds::new(viewport, &self.options.root_margin);
        let threshold = self.options.threshold;
        let observed = self.elements.get_mut(key)?;
        observed.rect = rect;
        let record = advance(&mut observed.record, rect, root, threshold);
        if observed.once && record.is_intersecting {
            self.elements.remove(key);
        }
        Some(record)
    }

    /// Re-evaluates every observed element against `viewport`.
    ///
    /// `f` is called only for elements whose `is_intersecting` flag changed. One-shot elements
    /// are dropped after being reported as intersecting.
    pub fn on_viewport_change(
        &mut self,
        viewport: Viewport,
        mut f: impl FnMut(&K, IntersectionRecord),
    ) {
        let root = RootBounds::new(viewport, &self.options.root_margin);
        let threshold = self.options.threshold;
        self.elements.retain(|key, observed| {
            let was = observed.record.is_intersecting;
            let record = advance(&mut observed.record, observed.rect, root, threshold);
            if record.is_intersecting != was {
                f(key, record);
            }
            !(observed.once && record.is_intersecting)
        });
    }

    fn insert(
        &mut self,
        key: K,
        rect: ElementRect,
        viewport: Viewport,
        once: bool,
    ) -> IntersectionRecord {
        let root = RootBounds::new(viewport, &self.options.root_margin);
        let threshold = self.options.threshold;
        let observed = self.elements.entry(key).or_insert(Observed {
            rect,
            record: IntersectionRecord::default(),
            once,
        });
        observed.rect = rect;
        observed.once = once;
        advance(&mut observed.record, rect, root, threshold)
    }
}

fn advance(
    record: &mut IntersectionRecord,
    rect: ElementRect,
    root: RootBounds,
    threshold: f64,
) -> IntersectionRecord {
    record.is_intersecting = is_intersecting(rect, root, threshold);
    record.has_intersected |= record.is_intersecting;
    *record
}

impl<K> fmt::Debug for VisibilityObserver<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("options", &self.options)
            .field("observed", &self.elements.len())
            .finish()
    }
}
