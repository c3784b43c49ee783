use std::io::Write;

use super::{Command, CommandError, ExecutionOutcome};
use crate::core::ShellState;

#[derive(Clone, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        for (index, entry) in state.history().entries().iter().enumerate() {
            writeln!(out, "{}: {}", index + 1, entry)?;
        }
        Ok(ExecutionOutcome::Completed)
    }
}
