use core::fmt;

use crate::subscribers::{SubscriptionId, Subscribers};
use crate::timing::Debounce;
use crate::{ScrollDirection, ScrollState, TrackerOptions};

/// Frame-coalesced page scroll tracker.
///
/// This type holds no UI objects. Adapters drive it by calling:
/// - `on_scroll_event` from a passive scroll listener; when it returns `true`, request one
///   animation frame
/// - `on_animation_frame(offset, now_ms)` from that frame callback, with the live scroll offset
/// - `tick(now_ms)` from a timer, so `is_scrolling` can settle back to `false`
///
/// However many raw scroll events arrive between two frames, at most one state mutation is
/// committed per frame.
pub struct ScrollTracker {
    options: TrackerOptions,
    state: ScrollState,
    frame_pending: bool,
    idle: Debounce,
    commits: u64,
    subscribers: Subscribers<ScrollState>,
}

impl ScrollTracker {
    /// Creates a tracker whose initial state reflects `initial_offset` (not scrolling, heading
    /// down). The initial state is not counted as a commit.
    pub fn new(options: TrackerOptions, initial_offset: f64) -> Self {
        pdebug!(
            initial_offset,
            reset_delay_ms = options.is_scrolling_reset_delay_ms,
            "ScrollTracker::new"
        );
        Self {
            idle: Debounce::new(options.is_scrolling_reset_delay_ms),
            options,
            state: ScrollState::at(initial_offset),
            frame_pending: false,
            commits: 0,
            subscribers: Subscribers::new(),
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TrackerOptions) {
        self.idle.set_delay_ms(options.is_scrolling_reset_delay_ms);
        self.options = options;
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    pub fn direction(&self) -> ScrollDirection {
        self.state.direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    /// Whether a frame has been requested and not yet delivered.
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Number of committed state mutations since creation.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// The timestamp at which `is_scrolling` will reset if no new sample arrives.
    pub fn idle_deadline_ms(&self) -> Option<u64> {
        self.idle.deadline_ms()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&ScrollState) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Call this for every raw scroll event.
    ///
    /// Returns `true` when the adapter should request an animation frame, i.e. when no frame
    /// is already pending.
    pub fn on_scroll_event(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Call this from the animation-frame callback requested after `on_scroll_event`.
    ///
    /// Returns `true` if a state change was committed. A frame that was never requested, or a
    /// sample whose offset equals the previous one, is a no-op.
    pub fn on_animation_frame(&mut self, offset: f64, now_ms: u64) -> bool {
        if !self.frame_pending {
            ptrace!(offset, now_ms, "on_animation_frame: no pending frame");
            return false;
        }
        self.frame_pending = false;

        let offset = offset.max(0.0);
        if offset == self.state.offset {
            return false;
        }

        let direction = if offset >= self.state.offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        ptrace!(offset, now_ms, ?direction, "on_animation_frame: commit");

        self.state = ScrollState {
            offset,
            direction,
            is_scrolling: true,
        };
        self.idle.arm(now_ms);
        self.commit();
        true
    }

    /// Timer entry point. Flips `is_scrolling` to `false` once the idle window has passed.
    ///
    /// Returns `true` if that transition happened on this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.idle.poll(now_ms) {
            return false;
        }
        if !self.state.is_scrolling {
            return false;
        }
        ptrace!(now_ms, "ScrollTracker: scrolling settled");
        self.state.is_scrolling = false;
        self.commit();
        true
    }

    /// Tears down the tracker's live resources: the pending frame, the idle timer and all
    /// subscriptions. The last state stays readable.
    pub fn detach(&mut self) {
        pdebug!(subscribers = self.subscribers.len(), "ScrollTracker::detach");
        self.frame_pending = false;
        self.idle.cancel();
        self.subscribers.clear();
    }

    fn commit(&mut self) {
        self.commits = self.commits.saturating_add(1);
        let state = self.state;
        self.subscribers.emit(&state);
    }
}

impl fmt::Debug for ScrollTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTracker")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("frame_pending", &self.frame_pending)
            .field("commits", &self.commits)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
