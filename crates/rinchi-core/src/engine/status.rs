use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// Severity of a status message; ordered so that the worst severity compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Success,
    Warning,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Success => "SUCCESS",
                Self::Warning => "WARNING",
                Self::Error => "ERROR",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub status: Status,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, status: Status) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

/// Receives every status message recorded during a decomposition.
///
/// Sinks are passed explicitly to the entry points in
/// [`workflows::decompose`](crate::workflows::decompose); there is no global sink.
/// Closures taking a `&StatusMessage` implement this trait.
pub trait StatusSink {
    fn add_message(&self, message: &StatusMessage);
}

/// Discards every message. Used when the caller does not supply a sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl StatusSink for NoopSink {
    fn add_message(&self, _message: &StatusMessage) {}
}

/// Forwards messages to `tracing` at the level matching their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn add_message(&self, message: &StatusMessage) {
        match message.status {
            Status::Success => info!("{}", message.text),
            Status::Warning => warn!("{}", message.text),
            Status::Error => error!("{}", message.text),
        }
    }
}

impl<F> StatusSink for F
where
    F: Fn(&StatusMessage),
{
    fn add_message(&self, message: &StatusMessage) {
        self(message)
    }
}

/// Messages recorded for one decomposition, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusLog {
    messages: Vec<StatusMessage>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message and hands it to `sink`.
    pub fn add_message(&mut self, message: StatusMessage, sink: &dyn StatusSink) {
        sink.add_message(&message);
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    /// The worst severity recorded, or [`Status::Success`] for an empty log.
    pub fn status(&self) -> Status {
        self.messages
            .iter()
            .map(|m| m.status)
            .max()
            .unwrap_or_default()
    }

    /// All message texts joined with `"; "`.
    pub fn summary(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
