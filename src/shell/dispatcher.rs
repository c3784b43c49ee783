use std::io::Write;

use crate::core::commands::{CommandError, CommandExecutor, ExecutionOutcome, RECALL};
use crate::core::ShellState;

/// Splits on single spaces after trimming trailing whitespace. There is no
/// quoting or escaping, and repeated spaces produce empty tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.trim_end().split(' ').map(String::from).collect()
}

fn is_recall(line: &str) -> bool {
    tokenize(line).first().map(String::as_str) == Some(RECALL)
}

#[derive(Clone, Default)]
pub struct Dispatcher {
    executor: CommandExecutor,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            executor: CommandExecutor::new(),
        }
    }

    /// Runs one non-blank input line and records it in history, whether the
    /// command succeeded or failed. `exit` lines are not recorded since the
    /// session ends after saving. A `!!` line is recorded after the line it
    /// re-runs.
    pub fn dispatch(
        &self,
        line: &str,
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        let tokens = tokenize(line);
        tracing::debug!("dispatching {:?}", tokens);

        match self.executor.execute(&tokens, state, out) {
            Ok(ExecutionOutcome::Exit(code)) => Ok(ExecutionOutcome::Exit(code)),
            Ok(ExecutionOutcome::Recall) => {
                let result = self.recall(state, out);
                state.history_mut().add(line);
                result
            }
            result => {
                state.history_mut().add(line);
                result
            }
        }
    }

    fn recall(
        &self,
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        // Stored `!!` lines would only recall themselves; skip past them.
        let Some(last) = state
            .history()
            .entries()
            .iter()
            .rev()
            .find(|entry| !is_recall(entry))
            .cloned()
        else {
            return Ok(ExecutionOutcome::Completed);
        };

        if last.trim().is_empty() {
            return Ok(ExecutionOutcome::Completed);
        }

        writeln!(out, "{}", last)?;
        self.dispatch(&last, state, out)
    }
}
