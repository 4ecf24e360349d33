//! A headless scroll and visibility engine for single-page sites.
//!
//! This crate holds the state machines behind scroll-driven page chrome:
//! - a frame-coalesced scroll tracker (offset, direction, `is_scrolling`)
//! - per-element viewport intersection with a latched "has intersected" flag
//! - a throttled, geometry-caching active-section resolver (scroll-spy)
//!
//! It is UI-agnostic. A browser/TUI/GUI layer is expected to provide:
//! - scroll events, animation-frame and timer callbacks (as `now_ms` timestamps)
//! - the live scroll offset and viewport height
//! - element and section geometry
//!
//! For smooth scrolling, easing curves and reveal styles, see the `pagescroll-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod margin;
mod options;
mod section;
mod state;
mod subscribers;
mod timing;
mod tracker;
mod types;
mod visibility;


pub use key::{CacheKey, KeyMap};
pub use margin::{MarginLength, RootMargin, RootMarginError};
pub use options::{
    DEFAULT_IS_SCROLLING_RESET_DELAY_MS, DEFAULT_NAV_OFFSET, DEFAULT_ROOT_MARGIN_PX,
    DEFAULT_SECTION_THROTTLE_MS, DEFAULT_THRESHOLD, ObserverOptions, ResolverOptions,
    TrackerOptions,
};
pub use section::{GeometryCache, SectionResolver, section_past_end, select_section};
pub use state::{BACK_TO_TOP_THRESHOLD, NAV_CONDENSE_THRESHOLD, ScrollState};
pub use subscribers::{SubscriptionId, Subscribers};
pub use timing::{Debounce, Throttle};
pub use tracker::ScrollTracker;
pub use types::{ElementRect, IntersectionRecord, ScrollDirection, SectionGeometry, Viewport};
pub use visibility::{
    RootBounds, VisibilityObserver, intersection_ratio, is_fully_in_viewport, is_intersecting,
};
