use crate::ease::Ease;
use crate::error::{CueError, CueResult};
use crate::fade::FadeTiming;
use crate::sequencer::Sequencer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One multi-line block of presentation text, assembled from a cue entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreditText {
    text: String,
}

impl CreditText {
    /// Join the entry's lines into one centered-block string.
    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            text: lines.join("\n"),
        }
    }

    /// The assembled block.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CreditText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn default_delay_secs() -> f64 {
    FadeTiming::DEFAULT_DELAY_SECS
}

fn default_fade_secs() -> f64 {
    FadeTiming::DEFAULT_FADE_SECS
}

fn default_hold_secs() -> f64 {
    FadeTiming::DEFAULT_HOLD_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CueSheetDef {
    #[serde(default = "default_delay_secs")]
    pub(crate) delay_secs: f64,
    #[serde(default = "default_fade_secs")]
    pub(crate) fade_secs: f64,
    #[serde(default = "default_hold_secs")]
    pub(crate) hold_secs: f64,
    #[serde(default)]
    pub(crate) ease: Ease,
    pub(crate) entries: Vec<CueEntryDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CueEntryDef {
    /// Caption shown with the entry. Empty means no caption (logos).
    #[serde(default)]
    pub(crate) header: String,
    pub(crate) lines: Vec<String>,
}

/// JSON-facing cue sheet.
///
/// This is the human-edited list of headers and text blocks plus the
/// sequence-wide timing. It is validated and lowered into a
/// [`Sequencer`] of [`CreditText`] entries.
#[derive(Debug, Clone)]
pub struct CueSheet {
    def: CueSheetDef,
}

impl CueSheet {
    /// Parse a cue sheet from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CueResult<Self> {
        let def: CueSheetDef = serde_json::from_reader(r)
            .map_err(|e| CueError::configuration(format!("parse cue sheet JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a cue sheet from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CueError::configuration(format!("open cue sheet JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the sheet without lowering it: timing fields must be valid and
    /// every entry must carry at least one line.
    pub fn validate(&self) -> CueResult<()> {
        self.timing()?;
        if self.def.entries.is_empty() {
            return Err(CueError::configuration(
                "cue sheet must contain at least one entry",
            ));
        }
        for (i, entry) in self.def.entries.iter().enumerate() {
            if entry.lines.is_empty() {
                return Err(CueError::configuration(format!(
                    "cue sheet entry {i} ('{}') has no lines",
                    entry.header
                )));
            }
        }
        Ok(())
    }

    /// Number of entries in the sheet.
    pub fn entry_count(&self) -> usize {
        self.def.entries.len()
    }

    /// The sheet-wide envelope timing.
    pub fn timing(&self) -> CueResult<FadeTiming> {
        FadeTiming::new(
            self.def.delay_secs,
            self.def.fade_secs,
            self.def.hold_secs,
        )
    }

    /// Validate and lower the sheet into a runnable sequencer.
    pub fn into_sequencer(self) -> CueResult<Sequencer<CreditText>> {
        self.validate()?;
        let timing = self.timing()?;
        let ease = self.def.ease;

        let mut headers = Vec::with_capacity(self.def.entries.len());
        let mut items = Vec::with_capacity(self.def.entries.len());
        for entry in &self.def.entries {
            headers.push(entry.header.clone());
            items.push(CreditText::from_lines(&entry.lines));
        }

        Sequencer::with_ease(items, headers, timing, ease)
    }
}
