use crate::ease::Ease;
use crate::error::{CueError, CueResult};
use crate::timing::TimeDelta;

/// Timing constants for one entry's visibility envelope, in seconds.
///
/// The envelope is always `delay -> fade-in -> hold -> fade-out`, with the
/// two fade ramps sharing one duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeTiming {
    /// Wait before the fade-in begins.
    pub delay_secs: f64,
    /// Length of each fade ramp.
    pub fade_secs: f64,
    /// Time fully opaque between the ramps.
    pub hold_secs: f64,
}

impl FadeTiming {
    /// Default wait before the fade-in begins.
    pub const DEFAULT_DELAY_SECS: f64 = 1.0;
    /// Default fade ramp length.
    pub const DEFAULT_FADE_SECS: f64 = 1.0;
    /// Default fully-opaque hold.
    pub const DEFAULT_HOLD_SECS: f64 = 5.0;

    /// Create a validated timing; every field must be finite and `>= 0`.
    pub fn new(delay_secs: f64, fade_secs: f64, hold_secs: f64) -> CueResult<Self> {
        for (name, v) in [
            ("delay_secs", delay_secs),
            ("fade_secs", fade_secs),
            ("hold_secs", hold_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CueError::configuration(format!(
                    "FadeTiming {name} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(Self {
            delay_secs,
            fade_secs,
            hold_secs,
        })
    }

    /// Default ramps with a custom hold.
    pub fn with_hold(hold_secs: f64) -> CueResult<Self> {
        Self::new(
            Self::DEFAULT_DELAY_SECS,
            Self::DEFAULT_FADE_SECS,
            hold_secs,
        )
    }

    /// Full envelope length: `delay + fade-in + hold + fade-out`.
    pub fn total_secs(self) -> f64 {
        self.delay_secs + 2.0 * self.fade_secs + self.hold_secs
    }
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            delay_secs: Self::DEFAULT_DELAY_SECS,
            fade_secs: Self::DEFAULT_FADE_SECS,
            hold_secs: Self::DEFAULT_HOLD_SECS,
        }
    }
}

/// Lifecycle stage of a fade envelope.
///
/// Exactly one stage holds at any moment and the progression is monotonic; a
/// timeline never moves from a later stage back to an earlier one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    /// Before the fade-in begins.
    Pending,
    /// Opacity ramping 0 -> 1.
    FadingIn,
    /// Fully opaque.
    Holding,
    /// Opacity ramping 1 -> 0.
    FadingOut,
    /// Fade-out fully completed.
    Finished,
}

/// One entry's visibility envelope, advanced explicitly once per frame.
///
/// The timeline only accumulates sanitized elapsed time; the phase and
/// opacity are derived from it, so no delta can rewind or corrupt the state.
#[derive(Clone, Debug)]
pub struct FadeTimeline {
    timing: FadeTiming,
    ease: Ease,
    elapsed_secs: f64,
}

impl FadeTimeline {
    /// Start a linear envelope at its beginning.
    pub fn new(timing: FadeTiming) -> Self {
        Self::with_ease(timing, Ease::Linear)
    }

    /// Start an envelope with a custom ramp curve.
    pub fn with_ease(timing: FadeTiming, ease: Ease) -> Self {
        Self {
            timing,
            ease,
            elapsed_secs: 0.0,
        }
    }

    /// Advance by one frame's elapsed time.
    pub fn advance(&mut self, dt: TimeDelta) {
        self.elapsed_secs += dt.as_secs();
    }

    /// Current lifecycle stage.
    pub fn phase(&self) -> FadePhase {
        let fade_in_start = self.timing.delay_secs;
        let hold_start = fade_in_start + self.timing.fade_secs;
        let fade_out_start = hold_start + self.timing.hold_secs;
        let end = fade_out_start + self.timing.fade_secs;

        let t = self.elapsed_secs;
        if t >= end {
            FadePhase::Finished
        } else if t >= fade_out_start {
            FadePhase::FadingOut
        } else if t >= hold_start {
            FadePhase::Holding
        } else if t >= fade_in_start {
            FadePhase::FadingIn
        } else {
            FadePhase::Pending
        }
    }

    /// Current opacity in `[0,1]`, linear in elapsed time over each ramp
    /// (modulo the configured ease).
    pub fn opacity(&self) -> f64 {
        match self.phase() {
            FadePhase::Pending | FadePhase::Finished => 0.0,
            FadePhase::Holding => 1.0,
            FadePhase::FadingIn => {
                let ramp = (self.elapsed_secs - self.timing.delay_secs) / self.timing.fade_secs;
                self.ease.apply(ramp)
            }
            FadePhase::FadingOut => {
                let fade_out_start =
                    self.timing.delay_secs + self.timing.fade_secs + self.timing.hold_secs;
                let ramp = (self.elapsed_secs - fade_out_start) / self.timing.fade_secs;
                1.0 - self.ease.apply(ramp)
            }
        }
    }

    /// Return `true` once the fade-out has fully completed (opacity back at 0
    /// after having reached 1).
    pub fn is_finished(&self) -> bool {
        self.phase() == FadePhase::Finished
    }

    /// Time accumulated past the end of the envelope, `0` while running.
    ///
    /// When one entry finishes mid-frame, the spill seeds the next entry's
    /// timeline so that sequence duration stays exact across entries.
    pub fn overshoot_secs(&self) -> f64 {
        (self.elapsed_secs - self.timing.total_secs()).max(0.0)
    }

    /// Timing constants this envelope runs under.
    pub fn timing(&self) -> FadeTiming {
        self.timing
    }

    /// Total sanitized time fed through [`FadeTimeline::advance`].
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }
}
