//! Turns token vectors into running child processes.

use crate::lexer::TokenVector;
use std::fmt;
use std::io;
use std::process::{Child, Command};

/// A child process could not be created or awaited.
///
/// Distinct from "the program ran and exited non-zero", which the
/// interpreter does not treat as an error at all.
#[derive(Debug)]
pub enum SpawnError {
    /// The OS refused to create the process, typically because the
    /// named program does not exist.
    Spawn { program: String, source: io::Error },
    /// The foreground wait on a freshly spawned child failed.
    Wait { program: String, source: io::Error },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::Spawn { program, source } => write!(f, "{program}: {source}"),
            SpawnError::Wait { program, source } => {
                write!(f, "{program}: wait failed: {source}")
            }
        }
    }
}

impl std::error::Error for SpawnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpawnError::Spawn { source, .. } | SpawnError::Wait { source, .. } => Some(source),
        }
    }
}

/// Spawns commands and keeps track of background children.
///
/// Foreground children are waited on immediately, by handle, so an
/// unrelated background child can never be collected in their place.
/// Background children stay on the job list until a later
/// [`reap_finished`](Executor::reap_finished) sweep observes their exit;
/// any still running when the interpreter ends are left to the OS.
#[derive(Debug, Default)]
pub struct Executor {
    jobs: Vec<Child>,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of background children not yet known to have exited.
    pub fn outstanding_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Drop job-list entries whose child has terminated. Never blocks.
    pub fn reap_finished(&mut self) {
        self.jobs.retain_mut(|child| match child.try_wait() {
            Ok(Some(_)) => false,
            Ok(None) => true,
            // The handle is no longer usable; let the OS clean up.
            Err(_) => false,
        });
    }

    /// Run one command, consuming its tokens.
    ///
    /// A trailing `"&"` token selects background mode and is stripped
    /// before the program sees its argument list. The child inherits
    /// the parent's standard streams.
    ///
    /// # Panics
    ///
    /// Panics when called with zero real tokens; the interpreter loop
    /// filters those out before getting here.
    pub fn execute(&mut self, mut tokens: TokenVector) -> Result<(), SpawnError> {
        assert!(!tokens.is_empty(), "execute requires a command name");

        let background = tokens.last() == Some("&");
        if background {
            // The marker never reaches the program's argument list.
            let _ = tokens.pop();
        }

        let program = tokens.first().unwrap_or_default().to_string();
        let mut child = Command::new(&program)
            .args(tokens.tokens().iter().skip(1))
            .spawn()
            .map_err(|source| SpawnError::Spawn {
                program: program.clone(),
                source,
            })?;

        if background {
            self.jobs.push(child);
            return Ok(());
        }

        match child.wait() {
            Ok(_status) => Ok(()),
            Err(source) => Err(SpawnError::Wait { program, source }),
        }
    }
}
