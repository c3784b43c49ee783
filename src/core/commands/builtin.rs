use std::io::Write;

use super::{Command, CommandError, ExecutionOutcome};
use crate::core::ShellState;

pub const COMMENT: &str = "#";
pub const RECALL: &str = "!!";

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        let code = match args.get(1) {
            None => state.last_status(),
            Some(arg) => arg.parse::<u8>().map(i32::from).map_err(|_| {
                CommandError::InvalidArguments(format!(
                    "exit: {}: numeric argument in 0-255 required",
                    arg
                ))
            })?,
        };

        // The shell is leaving either way; a failed save is only reported.
        if let Err(e) = state.history().save() {
            tracing::warn!("history not saved on exit: {}", e);
            writeln!(out, "{}", CommandError::History(e))?;
        }

        Ok(ExecutionOutcome::Exit(code))
    }
}

#[derive(Clone, Default)]
pub struct CommentCommand;

impl CommentCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CommentCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        Ok(ExecutionOutcome::Completed)
    }
}

/// `!!`: the dispatcher owns the re-execution, this only asks for it.
#[derive(Clone, Default)]
pub struct RecallCommand;

impl RecallCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RecallCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        Ok(ExecutionOutcome::Recall)
    }
}
