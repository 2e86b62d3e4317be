use std::fmt::Display;
use std::io::Write;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// What happened at one step of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// The user entered a valid option number.
    Selected,
    /// The user answered `n` at the confirmation gate.
    Declined,
    /// The item's handler ran and asked to continue.
    Dispatched,
    /// The item's handler ran and ended the loop.
    Exited,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selected => write!(f, "selected"),
            Self::Declined => write!(f, "declined"),
            Self::Dispatched => write!(f, "dispatched"),
            Self::Exited => write!(f, "exited"),
        }
    }
}

/// One recorded step of a menu run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct EventRecord {
    pub kind: EventKind,
    /// 1-based option number as displayed on the menu.
    pub option: usize,
    pub label: String,
}

impl EventRecord {
    pub fn new(kind: EventKind, option: usize, label: &str) -> Self {
        Self {
            kind,
            option,
            label: label.to_string(),
        }
    }
}

/// Trait for formatting menu events.
///
/// An `EventFormatter` defines how an [`EventRecord`] is converted into the
/// line written to the transcript sink.
pub trait EventFormatter {
    fn format(&self, record: &EventRecord) -> String;
}

/// Formats menu events as single human-readable lines.
pub struct TextFormatter;

impl EventFormatter for TextFormatter {
    fn format(&self, record: &EventRecord) -> String {
        format!("{} option {} (\"{}\")", record.kind, record.option, record.label)
    }
}

/// Formats menu events as JSON strings.
#[cfg(feature = "json")]
pub struct JsonFormatter;

#[cfg(feature = "json")]
impl EventFormatter for JsonFormatter {
    fn format(&self, record: &EventRecord) -> String {
        serde_json::to_string(record).unwrap()
    }
}

/// A transcript of a menu run: a formatter paired with the sink its lines
/// are written to.
///
/// Sink failures are ignored; recording must never break the menu loop.
pub struct Transcript {
    formatter: Box<dyn EventFormatter>,
    sink: Box<dyn Write>,
}

impl Transcript {
    pub fn new(formatter: Box<dyn EventFormatter>, sink: Box<dyn Write>) -> Self {
        Self { formatter, sink }
    }

    pub(crate) fn record(&mut self, record: &EventRecord) {
        let line = self.formatter.format(record);
        writeln!(self.sink, "{}", line).ok();
        self.sink.flush().ok();
    }
}
