//! Prompting line reader with `!!` history recall.

use crate::line::CommandLine;
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// Prompt written before every read.
pub const PROMPT: &str = "mysh% ";

/// Outcome of one prompt-and-read cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete line, possibly empty. A recalled command comes back
    /// through this variant too, already echoed.
    Line(CommandLine),
    /// `!!` was entered but no command has been stored yet.
    NoHistory,
    /// The input source is exhausted.
    Eof,
}

/// Reads commands one byte at a time from `input`, prompting on `output`.
pub struct LineReader<R, W> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> LineReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt, then collect bytes up to (not including) the next newline.
    ///
    /// `history` is only read; recall hands back an independent clone of
    /// the stored line, never an alias into it. When the input closes
    /// mid-line, the bytes collected so far are returned as a complete
    /// line and the next call reports [`ReadOutcome::Eof`].
    pub fn read_line(&mut self, history: Option<&CommandLine>) -> Result<ReadOutcome> {
        write!(self.output, "{PROMPT}").context("could not write prompt")?;
        self.output.flush().context("could not flush prompt")?;

        let mut line = CommandLine::new();
        let mut byte = [0u8; 1];
        loop {
            let n = self
                .input
                .read(&mut byte)
                .context("could not read next command")?;
            if n == 0 {
                if line.is_empty() {
                    return Ok(ReadOutcome::Eof);
                }
                break;
            }
            if byte[0] == b'\n' {
                break;
            }
            line.push(byte[0])
                .context("could not grow buffer for next command")?;
        }

        if line.as_str() == "!!" {
            return match history {
                Some(last) => {
                    writeln!(self.output, "{PROMPT}{last}")
                        .context("could not echo recalled command")?;
                    Ok(ReadOutcome::Line(last.clone()))
                }
                None => {
                    writeln!(self.output, "No commands in history.")
                        .context("could not report empty history")?;
                    Ok(ReadOutcome::NoHistory)
                }
            };
        }

        Ok(ReadOutcome::Line(line))
    }
}
