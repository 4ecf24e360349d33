/// Coarse device capability bucket used to scale reveal animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerformanceTier {
    Low,
    Medium,
    #[default]
    High,
}

impl PerformanceTier {
    /// Classifies a device from what the platform reports.
    ///
    /// Unknown values default to 1 core, 4 GB of memory and a `"4g"` connection.
    pub fn classify(
        cores: Option<u32>,
        memory_gb: Option<f64>,
        effective_type: Option<&str>,
    ) -> Self {
        let cores = cores.unwrap_or(1);
        let memory_gb = memory_gb.unwrap_or(4.0);
        let effective_type = effective_type.unwrap_or("4g");

        if cores <= 2 || memory_gb <= 2.0 || matches!(effective_type, "slow-2g" | "2g") {
            Self::Low
        } else if cores <= 4 || memory_gb <= 4.0 || effective_type == "3g" {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Adaptive animation settings for reveal wrappers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionConfig {
    pub enabled: bool,
    pub duration_ms: u64,
    pub delay_ms: u64,
    /// Smaller travel distances for weak devices.
    pub reduced_complexity: bool,
}

/// Reveal duration the per-kind defaults are tuned for.
pub const BASELINE_DURATION_MS: u64 = 600;

impl Default for MotionConfig {
    fn default() -> Self {
        Self::for_tier(PerformanceTier::High, false)
    }
}

impl MotionConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            duration_ms: 0,
            delay_ms: 0,
            reduced_complexity: false,
        }
    }

    pub fn for_tier(tier: PerformanceTier, prefers_reduced_motion: bool) -> Self {
        if prefers_reduced_motion {
            return Self::disabled();
        }
        match tier {
            PerformanceTier::Low => Self {
                enabled: true,
                duration_ms: 300,
                delay_ms: 0,
                reduced_complexity: true,
            },
            PerformanceTier::Medium => Self {
                enabled: true,
                duration_ms: 500,
                delay_ms: 100,
                reduced_complexity: false,
            },
            PerformanceTier::High => Self {
                enabled: true,
                duration_ms: BASELINE_DURATION_MS,
                delay_ms: 100,
                reduced_complexity: false,
            },
        }
    }

    /// Scales a per-kind duration by this config's speed relative to the baseline.
    pub fn scale_duration(&self, duration_ms: u64) -> u64 {
        if !self.enabled {
            return 0;
        }
        duration_ms.saturating_mul(self.duration_ms) / BASELINE_DURATION_MS
    }
}
