/// A single eased scroll animation, driven by adapter frame ticks.
///
/// The start time is captured on the first tick rather than at creation, matching how
/// animation-frame loops stamp their first callback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: Option<u64>,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn starting_at(mut self, start_ms: u64) -> Self {
        self.start_ms = Some(start_ms);
        self
    }

    /// Stamps the start time on the first call; later calls return the stored value.
    pub fn start(&mut self, now_ms: u64) -> u64 {
        *self.start_ms.get_or_insert(now_ms)
    }

    /// Elapsed fraction of the duration, clamped to `0.0..=1.0`. Zero before the first tick.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let Some(start) = self.start_ms else {
            return 0.0;
        };
        let elapsed = now_ms.saturating_sub(start);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// The absolute scroll offset at `now_ms`. Exactly `to` once progress reaches 1.
    pub fn sample(&self, now_ms: u64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseInOutCubic,
    EaseOutQuad,
    EaseOutQuart,
    EaseOutExpo,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutQuad => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::EaseOutQuart => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - exp2(-10.0 * t)
                }
            }
        }
    }
}

#[cfg(feature = "std")]
fn exp2(x: f64) -> f64 {
    x.exp2()
}

// `f64::exp2` lives in std; split into an integer power and a short series for the fraction.
#[cfg(not(feature = "std"))]
fn exp2(x: f64) -> f64 {
    let mut whole = x as i64;
    if (whole as f64) > x {
        whole -= 1;
    }
    let frac = (x - whole as f64) * core::f64::consts::LN_2;

    let mut term = 1.0;
    let mut sum = 1.0;
    for n in 1..16 {
        term *= frac / n as f64;
        sum += term;
    }

    let base = if whole < 0 { 0.5 } else { 2.0 };
    for _ in 0..whole.unsigned_abs() {
        sum *= base;
    }
    sum
}
