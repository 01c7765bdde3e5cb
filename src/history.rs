//! Single-slot command history.

use crate::line::CommandLine;

/// Holds the most recently accepted command line, if any.
///
/// Deliberately one slot deep: `!!` only ever reaches back one command,
/// so a deeper store would never be read.
#[derive(Debug, Default)]
pub struct History {
    last: Option<CommandLine>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last accepted command, or `None` before the first one.
    pub fn last(&self) -> Option<&CommandLine> {
        self.last.as_ref()
    }

    /// Replace the stored command. The previous one is dropped.
    pub fn remember(&mut self, line: CommandLine) {
        self.last = Some(line);
    }
}
