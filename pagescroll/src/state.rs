use crate::ScrollDirection;

/// Offset above which the "back to top" control is shown.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Offset above which the navigation bar switches to its condensed style.
pub const NAV_CONDENSE_THRESHOLD: f64 = 20.0;

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub direction: ScrollDirection,
    pub is_scrolling: bool,
}

impl ScrollState {
    pub fn at(offset: f64) -> Self {
        Self {
            offset: offset.max(0.0),
            direction: ScrollDirection::Down,
            is_scrolling: false,
        }
    }

    /// Strictly past `threshold`.
    pub fn is_past(&self, threshold: f64) -> bool {
        self.offset > threshold
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.is_past(BACK_TO_TOP_THRESHOLD)
    }

    pub fn nav_condensed(&self) -> bool {
        self.is_past(NAV_CONDENSE_THRESHOLD)
    }
}
