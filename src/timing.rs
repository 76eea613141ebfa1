/// Elapsed wall time between two render frames, in seconds.
///
/// Frame loops occasionally report garbage deltas (negative after a clock
/// step, NaN from a paused driver). The only way to build a `TimeDelta` is
/// through [`TimeDelta::sanitized`], so downstream phase state never sees a
/// value that is not finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDelta(f64);

impl TimeDelta {
    /// A zero-length delta.
    pub const ZERO: Self = Self(0.0);

    /// Sanitize a raw frame delta: NaN, infinite, and negative inputs clamp
    /// to zero.
    pub fn sanitized(raw_secs: f64) -> Self {
        if raw_secs.is_finite() && raw_secs > 0.0 {
            Self(raw_secs)
        } else {
            Self(0.0)
        }
    }

    /// Seconds, guaranteed finite and `>= 0`.
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Return `true` when the delta carries no time.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}
