//! Fadecue drives timed, sequential on-screen presentations.
//!
//! A [`Sequencer`] owns an ordered list of entries (credit groups, logos,
//! text blocks) with index-aligned headers. Each entry runs a
//! delay → fade-in → hold → fade-out envelope; the sequence advances only
//! when the live entry's envelope has fully completed, and reports completion
//! to the host exactly once when the list is exhausted.
//!
//! The public API is frame-driven:
//!
//! - build a [`Sequencer`] directly, or load a [`CueSheet`] from JSON
//! - drive it once per render frame with [`Sequencer::tick`] (or through a
//!   [`CueSession`] with host lifecycle hooks)
//! - draw whatever [`Sequencer::current`] reports, at the opacities it
//!   reports
#![forbid(unsafe_code)]

pub mod ease;
pub mod error;
pub mod fade;
pub mod host;
pub mod sequencer;
pub mod session;
pub mod sheet;
pub mod timing;

pub use ease::Ease;
pub use error::{CueError, CueResult};
pub use fade::{FadePhase, FadeTimeline, FadeTiming};
pub use host::{CueHost, RecordingHost};
pub use sequencer::{CueDisplay, Sequencer, Tick};
pub use session::CueSession;
pub use sheet::{CreditText, CueSheet};
pub use timing::TimeDelta;
