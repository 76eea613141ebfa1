use crate::ease::Ease;
use crate::error::{CueError, CueResult};
use crate::fade::{FadeTimeline, FadeTiming};
use crate::timing::TimeDelta;

/// Outcome of a single [`Sequencer::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// An entry is live; keep rendering.
    Active,
    /// The final entry just finished. Reported exactly once.
    Complete,
    /// The sequence finished on an earlier tick; this call was a no-op.
    Terminal,
}

/// What the renderer should draw this frame.
#[derive(Clone, Copy, Debug)]
pub struct CueDisplay<'a, T> {
    /// Caption shown with the entry. May be empty.
    pub header: &'a str,
    /// The live entry.
    pub item: &'a T,
    /// Caption alpha in `[0,1]`.
    pub header_opacity: f64,
    /// Entry alpha in `[0,1]`.
    pub item_opacity: f64,
}

/// Ordered presentation state machine.
///
/// Owns N entries and N index-aligned headers plus the pair of fade envelopes
/// bound to the live index. The caption and its entry run independent
/// envelopes with identical timing, so they appear and disappear in lockstep.
///
/// States are `Active(i)` for `i in 0..N` plus `Terminal`. `Active(i)` moves
/// to `Active(i+1)` when the entry's envelope finishes; `Active(N-1)` moves
/// to `Terminal`. No transition leaves `Terminal` and the cursor never
/// revisits an index.
#[derive(Debug)]
pub struct Sequencer<T> {
    items: Vec<T>,
    headers: Vec<String>,
    timing: FadeTiming,
    ease: Ease,
    cursor: usize,
    item_fade: FadeTimeline,
    header_fade: FadeTimeline,
}

impl<T> Sequencer<T> {
    /// Build a sequencer over parallel entry and header lists.
    ///
    /// Fails fast on an empty list or a length mismatch; a sequencer is never
    /// constructed in a broken configuration.
    pub fn new(items: Vec<T>, headers: Vec<String>, timing: FadeTiming) -> CueResult<Self> {
        Self::with_ease(items, headers, timing, Ease::Linear)
    }

    /// Build a sequencer whose fade ramps run through `ease`.
    pub fn with_ease(
        items: Vec<T>,
        headers: Vec<String>,
        timing: FadeTiming,
        ease: Ease,
    ) -> CueResult<Self> {
        if items.is_empty() {
            return Err(CueError::configuration(
                "sequence must contain at least one entry",
            ));
        }
        if items.len() != headers.len() {
            return Err(CueError::configuration(format!(
                "entry/header count mismatch: {} entries, {} headers",
                items.len(),
                headers.len()
            )));
        }

        Ok(Self {
            items,
            headers,
            timing,
            ease,
            cursor: 0,
            item_fade: FadeTimeline::with_ease(timing, ease),
            header_fade: FadeTimeline::with_ease(timing, ease),
        })
    }

    /// Advance one render frame.
    ///
    /// The bound envelopes move by the sanitized delta; each time the live
    /// entry's envelope finishes, the cursor advances and the spill past the
    /// envelope end seeds the next entry, so a delta stream summing to
    /// `N * total` lands exactly on `Terminal`. Ticking a terminal sequencer
    /// is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, delta_secs: f64) -> Tick {
        if self.is_terminal() {
            return Tick::Terminal;
        }

        let dt = TimeDelta::sanitized(delta_secs);
        self.item_fade.advance(dt);
        self.header_fade.advance(dt);

        while self.item_fade.is_finished() {
            let spill = TimeDelta::sanitized(self.item_fade.overshoot_secs());
            self.cursor += 1;
            if self.is_terminal() {
                tracing::debug!(entries = self.items.len(), "sequence complete");
                return Tick::Complete;
            }

            tracing::debug!(cursor = self.cursor, "advanced to next entry");
            self.bind_cursor();
            self.item_fade.advance(spill);
            self.header_fade.advance(spill);
        }

        Tick::Active
    }

    /// The live caption/entry pair with their current opacities.
    ///
    /// A terminal sequencer has nothing to show; asking anyway is a state
    /// error.
    pub fn current(&self) -> CueResult<CueDisplay<'_, T>> {
        if self.is_terminal() {
            return Err(CueError::state("sequence is terminal, nothing to display"));
        }
        Ok(CueDisplay {
            header: &self.headers[self.cursor],
            item: &self.items[self.cursor],
            header_opacity: self.header_fade.opacity(),
            item_opacity: self.item_fade.opacity(),
        })
    }

    /// Rewind to the first entry with fresh envelopes (session reactivation).
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.bind_cursor();
    }

    /// Index of the live entry. Equals [`Sequencer::len`] once terminal.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a sequencer holds at least one entry by construction.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return `true` once every entry has been shown.
    pub fn is_terminal(&self) -> bool {
        self.cursor == self.items.len()
    }

    /// Timing every entry's envelope runs under.
    pub fn timing(&self) -> FadeTiming {
        self.timing
    }

    fn bind_cursor(&mut self) {
        self.item_fade = FadeTimeline::with_ease(self.timing, self.ease);
        self.header_fade = FadeTimeline::with_ease(self.timing, self.ease);
    }
}
