//! A minimal interactive command interpreter.
//!
//! This crate provides the building blocks of a small shell: a prompting
//! line reader with a one-deep `!!` history shortcut, a tokenizer that
//! treats double-quoted text as a single argument, and an executor that
//! spawns external programs in the foreground or, with a trailing `&`,
//! in the background. It is intentionally small and easy to read,
//! suitable for experiments with process management and argument parsing.
//!
//! The main entry point is [`Interpreter`], which drives the
//! read–tokenize–execute cycle over any pair of input/output streams.
//! The public modules expose the individual pieces for reuse: [`line`]
//! for the growable command buffer, [`lexer`] for tokenization,
//! [`history`] for the single-slot store and [`executor`] for process
//! spawning.

pub mod executor;
pub mod history;
mod interpreter;
pub mod lexer;
pub mod line;
pub mod reader;

/// Re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
