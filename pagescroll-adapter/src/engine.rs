use crate::target::{DEFAULT_HEADER_OFFSET, resolve_target};
use crate::{ScrollCommand, ScrollVariant, TargetLookup, Tween};

/// Programmatic scroll-to engine.
///
/// This type does not hold any UI objects. A scroll-to call either returns a native command
/// for the adapter to forward to the platform, or starts a tween that the adapter advances by
/// calling `tick(now_ms)` from its animation-frame callback and writing the returned offset.
///
/// At most one tween runs at a time: a new scroll-to request cancels the one in flight.
#[derive(Clone, Debug)]
pub struct ScrollEngine {
    header_offset: f64,
    tween: Option<Tween>,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            tween: None,
        }
    }

    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    pub fn set_header_offset(&mut self, header_offset: f64) {
        self.header_offset = header_offset;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Stops the running tween, if any. Returns `true` if one was cancelled.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.tween.take().is_some();
        if cancelled {
            pdebug!("ScrollEngine: tween cancelled");
        }
        cancelled
    }

    /// Scrolls so that the element matched by `selector` sits just below the fixed header.
    ///
    /// A selector that matches nothing is a no-op: nothing is cancelled and `None` is returned.
    pub fn scroll_to(
        &mut self,
        selector: &str,
        variant: ScrollVariant,
        current_offset: f64,
        lookup: &mut impl TargetLookup,
    ) -> Option<ScrollCommand> {
        let to = resolve_target(lookup, selector, current_offset, self.header_offset)?;
        ptrace!(selector, to, ?variant, "ScrollEngine::scroll_to");
        Some(self.scroll_to_offset(to, variant, current_offset))
    }

    /// Scrolls to an absolute document offset (clamped to `>= 0`).
    pub fn scroll_to_offset(
        &mut self,
        offset: f64,
        variant: ScrollVariant,
        current_offset: f64,
    ) -> ScrollCommand {
        let to = offset.max(0.0);
        self.cancel();

        match variant.animation() {
            Some((duration_ms, easing)) => {
                self.tween = Some(Tween::new(current_offset, to, duration_ms, easing));
                ScrollCommand::Animate {
                    from: current_offset,
                    to,
                }
            }
            None => ScrollCommand::Native {
                top: to,
                behavior: variant.native_behavior().unwrap_or_default(),
            },
        }
    }

    pub fn scroll_to_top(&mut self, variant: ScrollVariant, current_offset: f64) -> ScrollCommand {
        self.scroll_to_offset(0.0, variant, current_offset)
    }

    pub fn scroll_to_bottom(
        &mut self,
        document_height: f64,
        variant: ScrollVariant,
        current_offset: f64,
    ) -> ScrollCommand {
        self.scroll_to_offset(document_height, variant, current_offset)
    }

    /// Advances the running tween.
    ///
    /// The first tick after a scroll-to stamps the start time. Returns the offset to write, or
    /// `None` when nothing is animating. The tick that reaches full progress returns the exact
    /// destination and ends the animation.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween.as_mut()?;
        tween.start(now_ms);
        let offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            ptrace!(offset, now_ms, "ScrollEngine: tween finished");
            self.tween = None;
        }
        Some(offset)
    }
}
