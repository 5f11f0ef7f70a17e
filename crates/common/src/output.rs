//! The one-directional notification channel from the core to its host.

use std::fmt;

/// A single notification emitted by the engine or the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A value emitted by a `PRINT` instruction.
    Printed(i64),
    /// The message of a failed engine operation.
    Failure(String),
    /// A raw input line, echoed when a whole script is fed in.
    Echo(String),
    /// The session was ended by `exit()` and all state was reset.
    SessionEnded,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Printed(value) => write!(f, "{value}"),
            Output::Failure(message) => f.write_str(message),
            Output::Echo(line) => write!(f, "> {line}"),
            Output::SessionEnded => f.write_str("Session ended."),
        }
    }
}

/// Receiver for [`Output`] notifications.
///
/// Delivery is synchronous: `receive` returns before the emitting operation
/// continues.
pub trait OutputSink {
    fn receive(&mut self, output: Output);
}

impl OutputSink for Vec<Output> {
    fn receive(&mut self, output: Output) {
        self.push(output);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn receive(&mut self, output: Output) {
        (**self).receive(output);
    }
}
