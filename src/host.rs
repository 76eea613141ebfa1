/// Host contract for a presentation run.
///
/// The host owns whatever comes after the sequence (switching screens,
/// re-enabling menus); the sequencer only reports. `sequence_complete` is
/// delivered exactly once per run, after the final entry's fade-out.
pub trait CueHost {
    /// The final entry has faded out. One-shot per run.
    fn sequence_complete(&mut self);

    /// Advisory input routing: `true` while the sequence plays, `false` when
    /// the session deactivates. Hosts that do not route input ignore this.
    fn capture_input(&mut self, active: bool) {
        let _ = active;
    }
}

/// Event log of host callbacks, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Number of `sequence_complete` deliveries.
    pub completions: usize,
    /// Every `capture_input` toggle in call order.
    pub input_toggles: Vec<bool>,
}

impl RecordingHost {
    /// Create an empty recording host.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CueHost for RecordingHost {
    fn sequence_complete(&mut self) {
        self.completions += 1;
    }

    fn capture_input(&mut self, active: bool) {
        self.input_toggles.push(active);
    }
}
