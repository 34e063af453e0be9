/// Time-based interpolation between two scroll offsets.
///
/// Sampling past the end returns `to` exactly, so a finished tween never leaves a rounding gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    /// A zero duration is stored as one millisecond.
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let span = self.to.abs_diff(self.from);
        let eased = self.easing.apply(self.progress(now_ms));
        let moved = ((span as f64 * eased) as u64).min(span);
        if self.to >= self.from {
            self.from + moved
        } else {
            self.from - moved
        }
    }

    /// Restarts from `from` toward `to`, keeping the original end time.
    ///
    /// Used when the target moves mid-flight (a node above it was measured, the viewport was
    /// resized). An already elapsed tween lands on the next sample.
    pub fn retarget(&mut self, now_ms: u64, from: u64, to: u64) {
        let remaining = self.end_ms().saturating_sub(now_ms);
        *self = Self::new(from, to, now_ms, remaining, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Fast start, gentle landing; the default for scroll-to animations.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`. Every curve is
    /// monotonic, so sampled offsets never overshoot the target.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
