//! The read–tokenize–execute loop.

use crate::executor::Executor;
use crate::history::History;
use crate::lexer;
use crate::reader::{LineReader, ReadOutcome};
use anyhow::Result;
use std::io::{Read, Write};

/// An interactive command interpreter over a pair of streams.
///
/// Owns the single-slot history and the background job list; one call
/// to [`run`](Interpreter::run) drives read–tokenize–execute cycles
/// until `exit` or end of input.
///
/// Example
/// ```
/// use mysh::Interpreter;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut sh = Interpreter::new(Cursor::new(b"exit\n".to_vec()), &mut out);
/// sh.run().unwrap();
/// assert_eq!(out, b"mysh% ");
/// ```
pub struct Interpreter<R, W> {
    reader: LineReader<R, W>,
    executor: Executor,
    history: History,
}

impl<R: Read, W: Write> Interpreter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            reader: LineReader::new(input, output),
            executor: Executor::new(),
            history: History::new(),
        }
    }

    /// Run cycles until `exit` or the input closes; both end normally.
    ///
    /// Only stream failures and buffer-growth failures abort the loop.
    /// A command that cannot be spawned is reported on standard error
    /// and the next cycle begins as usual.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.executor.reap_finished();

            let line = match self.reader.read_line(self.history.last())? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::NoHistory => continue,
                ReadOutcome::Eof => return Ok(()),
            };
            if line.is_empty() {
                continue;
            }
            // Recall re-affirms the same content here rather than
            // becoming a distinct entry.
            self.history.remember(line.clone());

            if line.as_str() == "exit" {
                return Ok(());
            }

            let tokens = lexer::tokenize(&line.as_str());
            if tokens.is_empty() {
                // Only spaces; nothing to run.
                continue;
            }
            if let Err(err) = self.executor.execute(tokens) {
                eprintln!("mysh: {err}");
            }
        }
    }
}
