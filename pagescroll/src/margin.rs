use alloc::string::String;
use core::str::FromStr;

use thiserror::Error;

/// One side of a [`RootMargin`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarginLength {
    Px(f64),
    /// Percentage of the viewport height.
    Percent(f64),
}

impl MarginLength {
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => viewport_height * pct / 100.0,
        }
    }
}

impl Default for MarginLength {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

/// A CSS-style margin that grows (or, when negative, shrinks) the intersection root.
///
/// Parses the usual 1–4 value shorthand: `"50px"`, `"10px 20px"`, `"0 0 10% 0"`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    pub fn uniform(length: MarginLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    pub fn px(px: f64) -> Self {
        Self::uniform(MarginLength::Px(px))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RootMarginError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes 1 to 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid root margin length `{0}` (expected px or %)")]
    InvalidLength(String),
}

fn parse_length(token: &str) -> Result<MarginLength, RootMarginError> {
    let finite = |num: &str| num.parse::<f64>().ok().filter(|v| v.is_finite());
    let invalid = || RootMarginError::InvalidLength(token.into());
    if let Some(num) = token.strip_suffix("px") {
        return finite(num).map(MarginLength::Px).ok_or_else(invalid);
    }
    if let Some(num) = token.strip_suffix('%') {
        return finite(num).map(MarginLength::Percent).ok_or_else(invalid);
    }
    // Unitless lengths are only valid for zero.
    match finite(token) {
        Some(v) if v == 0.0 => Ok(MarginLength::Px(0.0)),
        _ => Err(invalid()),
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [MarginLength::default(); 4];
        let mut n = 0usize;
        for token in s.split_whitespace() {
            if n == values.len() {
                return Err(RootMarginError::TooManyValues(s.split_whitespace().count()));
            }
            values[n] = parse_length(token)?;
            n += 1;
        }

        let [a, b, c, d] = values;
        match n {
            0 => Err(RootMarginError::Empty),
            1 => Ok(Self::uniform(a)),
            2 => Ok(Self {
                top: a,
                right: b,
                bottom: a,
                left: b,
            }),
            3 => Ok(Self {
                top: a,
                right: b,
                bottom: c,
                left: b,
            }),
            _ => Ok(Self {
                top: a,
                right: b,
                bottom: c,
                left: d,
            }),
        }
    }
}
