use alloc::vec::Vec;
use core::fmt;

use crate::key::{CacheKey, KeyMap};
use crate::timing::Throttle;
use crate::{ResolverOptions, SectionGeometry};

/// Section id → layout captured from the live document.
pub type GeometryCache<K> = KeyMap<K, SectionGeometry>;

/// Returns the index of the section that ends lowest on the page when `position` is at or
/// below its bottom edge (footer area, overscroll past the last section).
pub fn section_past_end<K: CacheKey>(
    sections: &[K],
    cache: &GeometryCache<K>,
    position: f64,
) -> Option<usize> {
    let mut last: Option<(usize, f64)> = None;
    for (index, id) in sections.iter().enumerate() {
        let Some(geometry) = cache.get(id) else {
            continue;
        };
        let bottom = geometry.bottom();
        if last.is_none_or(|(_, lowest)| bottom > lowest) {
            last = Some((index, bottom));
        }
    }
    last.filter(|&(_, bottom)| position >= bottom).map(|(index, _)| index)
}

/// Returns the index of the first section (in declaration order) whose cached interval
/// contains `position`.
///
/// Sections without a cache entry are skipped.
pub fn select_section<K: CacheKey>(
    sections: &[K],
    cache: &GeometryCache<K>,
    position: f64,
) -> Option<usize> {
    sections.iter().position(|id| {
        cache
            .get(id)
            .is_some_and(|geometry| geometry.contains(position))
    })
}

/// Scroll-spy: picks the section the navigation should highlight.
///
/// Section geometry is queried lazily and cached; the cache must be invalidated with
/// `on_resize` whenever the layout may have moved. Recomputation is throttled so that a burst
/// of scroll samples costs at most one lookup per `throttle_ms`.
#[derive(Clone)]
pub struct SectionResolver<K> {
    options: ResolverOptions,
    sections: Vec<K>,
    cache: GeometryCache<K>,
    throttle: Throttle,
    active: Option<usize>,
}

impl<K: CacheKey + Clone> SectionResolver<K> {
    /// The first declared section starts out active.
    pub fn new(options: ResolverOptions, sections: impl IntoIterator<Item = K>) -> Self {
        let sections: Vec<K> = sections.into_iter().collect();
        pdebug!(
            sections = sections.len(),
            throttle_ms = options.throttle_ms,
            nav_offset = options.nav_offset,
            "SectionResolver::new"
        );
        Self {
            throttle: Throttle::new(options.throttle_ms),
            active: if sections.is_empty() { None } else { Some(0) },
            options,
            sections,
            cache: GeometryCache::new(),
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn sections(&self) -> &[K] {
        &self.sections
    }

    pub fn active(&self) -> Option<&K> {
        self.active.and_then(|i| self.sections.get(i))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn cached_geometry(&self, id: &K) -> Option<SectionGeometry> {
        self.cache.get(id).copied()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Replaces the section list and drops the geometry cache.
    ///
    /// The active section is kept if it is still declared; otherwise the first section
    /// becomes active.
    pub fn set_sections(&mut self, sections: impl IntoIterator<Item = K>) {
        let prev = self.active().cloned();
        self.sections = sections.into_iter().collect();
        self.cache.clear();
        self.active = prev
            .and_then(|id| self.sections.iter().position(|s| *s == id))
            .or(if self.sections.is_empty() { None } else { Some(0) });
    }

    /// Invalidates all cached geometry. Call this on every viewport resize.
    pub fn on_resize(&mut self) {
        ptrace!(cached = self.cache.len(), "SectionResolver::on_resize");
        self.cache.clear();
    }

    /// Recomputes the active section for `scroll_offset`, at most once per throttle window.
    ///
    /// `geometry_of` is only called when the cache is empty; returning `None` for an id leaves
    /// that section unselectable until the cache is rebuilt. A probe position below every
    /// section selects the lowest one; any other miss keeps the previously active section.
    pub fn resolve(
        &mut self,
        scroll_offset: f64,
        now_ms: u64,
        geometry_of: impl FnMut(&K) -> Option<SectionGeometry>,
    ) -> Option<&K> {
        if self.sections.is_empty() || !self.throttle.try_acquire(now_ms) {
            return self.active();
        }

        if self.cache.is_empty() {
            self.populate(geometry_of);
        }

        let position = scroll_offset + self.options.nav_offset;
        let matched = select_section(&self.sections, &self.cache, position)
            .or_else(|| section_past_end(&self.sections, &self.cache, position));
        if let Some(index) = matched {
            if self.active != Some(index) {
                ptrace!(index, position, "SectionResolver: active section changed");
            }
            self.active = Some(index);
        }
        self.active()
    }

    fn populate(&mut self, mut geometry_of: impl FnMut(&K) -> Option<SectionGeometry>) {
        for id in &self.sections {
            match geometry_of(id) {
                Some(geometry) => {
                    self.cache.insert(id.clone(), geometry);
                }
                None => {
                    ptrace!("SectionResolver: section has no geometry yet");
                }
            }
        }
        pdebug!(
            cached = self.cache.len(),
            sections = self.sections.len(),
            "SectionResolver: geometry cache rebuilt"
        );
    }
}

impl<K: fmt::Debug> fmt::Debug for SectionResolver<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionResolver")
            .field("options", &self.options)
            .field("sections", &self.sections)
            .field("cached", &self.cache.len())
            .field("active", &self.active)
            .finish()
    }
}
