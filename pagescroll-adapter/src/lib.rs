//! Adapter utilities for the `pagescroll` crate.
//!
//! The `pagescroll` crate is UI-agnostic and focuses on the core scroll/visibility state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Programmatic scroll-to with native or custom-eased (cubic/quartic/exponential) variants
//! - Tweens and easing curves driven by animation-frame ticks
//! - Reveal-wrapper style mapping with device-adaptive motion settings
//! - A page controller wiring tracker, resolver and engine together
//!
//! This crate is intentionally framework-agnostic (no DOM/web-sys bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod engine;
mod motion;
mod reveal;
mod target;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::PageController;
pub use engine::ScrollEngine;
pub use motion::{BASELINE_DURATION_MS, MotionConfig, PerformanceTier};
pub use reveal::{
    RevealKind, RevealOptions, RevealStyle, RevealTransition, reveal_style, reveal_transition,
    should_animate, stagger_delay_ms,
};
pub use target::{
    CUBIC_DURATION_MS, DEFAULT_HEADER_OFFSET, EXPONENTIAL_DURATION_MS, QUARTIC_DURATION_MS,
    ScrollBehavior, ScrollCommand, ScrollVariant, TargetLookup, resolve_target, target_offset,
};
pub use tween::{Easing, Tween};
