/// A constant-velocity horizontal translation in flight.
///
/// The ticker models linear motion only; there is no easing. Durations are
/// clamped to at least 1ms — zero-distance legs never reach the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub from: i64,
    pub delta: i64,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Motion {
    pub fn new(from: i64, delta: i64, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            delta,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn target(&self) -> i64 {
        self.from.saturating_add(self.delta)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Samples the position at `now_ms`, clamped to the leg's span.
    pub fn sample(&self, now_ms: u64) -> i64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);

        let from = self.from as f32;
        let to = self.target() as f32;
        (from + (to - from) * t) as i64
    }
}
