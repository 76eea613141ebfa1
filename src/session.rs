use crate::error::CueResult;
use crate::host::CueHost;
use crate::sequencer::{CueDisplay, Sequencer, Tick};

/// Per-activation wrapper around a [`Sequencer`].
///
/// Mirrors a screen lifecycle: `activate` when the presentation becomes the
/// live screen, `frame` once per render tick, `deactivate` when the host
/// navigates away. A session may be reactivated; each activation rewinds to
/// the first entry. Dropping the session is the only other cleanup.
pub struct CueSession<T> {
    sequencer: Sequencer<T>,
}

impl<T> CueSession<T> {
    /// Wrap a sequencer for lifecycle-driven use.
    pub fn new(sequencer: Sequencer<T>) -> Self {
        Self { sequencer }
    }

    /// Begin a presentation run: rewind to the first entry and ask the host
    /// to capture input for the duration.
    #[tracing::instrument(skip(self, host))]
    pub fn activate(&mut self, host: &mut dyn CueHost) {
        self.sequencer.reset();
        host.capture_input(true);
    }

    /// Advance one render frame, forwarding the one-shot completion to the
    /// host.
    pub fn frame(&mut self, delta_secs: f64, host: &mut dyn CueHost) -> Tick {
        let outcome = self.sequencer.tick(delta_secs);
        if outcome == Tick::Complete {
            host.sequence_complete();
        }
        outcome
    }

    /// Release the advisory input capture.
    pub fn deactivate(&mut self, host: &mut dyn CueHost) {
        host.capture_input(false);
    }

    /// The live caption/entry pair, for the host's draw pass.
    pub fn display(&self) -> CueResult<CueDisplay<'_, T>> {
        self.sequencer.current()
    }

    /// Borrow the underlying sequencer.
    pub fn sequencer(&self) -> &Sequencer<T> {
        &self.sequencer
    }
}
