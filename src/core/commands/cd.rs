use std::io::Write;
use std::path::PathBuf;

use super::{Command, CommandError, ExecutionOutcome};
use crate::core::ShellState;
use crate::path::PathExpander;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn target(&self, arg: Option<&str>, state: &ShellState) -> PathBuf {
        match arg {
            None | Some("~") => state.home_dir().to_path_buf(),
            Some("-") => state.previous_dir().to_path_buf(),
            Some(path) => PathExpander::new(state.home_dir()).expand(path),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        let arg = args.get(1).map(String::as_str);
        let target = self.target(arg, state);

        state
            .change_dir(&target)
            .map_err(|source| CommandError::DirectoryChange {
                target: arg.map_or_else(|| target.display().to_string(), str::to_string),
                source,
            })?;

        Ok(ExecutionOutcome::Completed)
    }
}
