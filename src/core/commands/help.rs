use std::io::Write;

use super::{Command, CommandError, ExecutionOutcome};
use crate::core::ShellState;

const SUMMARY: &str = "\
KShell, a small interactive shell.

    Type program names and arguments, and hit <enter>.
    These shell commands are defined internally.  Type `help` to see this list.
    Type `help name` to find out more about the command `name'.

    cd [dir]
    exit [n]
    which filename ...
    history
    help [name]
    # comment
    !!";

const CD_USAGE: &str = "\
cd: cd [dir]

    Change the shell working directory.

    Change the current directory to 'dir'. The default 'dir' is the user's home directory.
    Special cases:
    - `cd ~`: Change the current directory to $HOME.
    - `cd ~/dir`: Change to 'dir' under $HOME.
    - `cd -`: Move back to the previous directory.
    - `cd`: Change the current directory to $HOME.";

const EXIT_USAGE: &str = "\
exit: exit [n]

    Exit the shell.

    Saves the command history, then exits with a status of 'n' (0-255).
    If 'n' is omitted, the status is that of the last command.";

const WHICH_USAGE: &str = "\
which: which filename ...

    Locate a command.

    Prints the path names of the files which would be executed in the current environment.
    It does this by searching the PATH for files matching the names of the arguments.";

const HISTORY_USAGE: &str = "\
history: history

    Display the history list.

    Display the history list with line numbers. `!!` runs the most recent entry again.";

const HELP_USAGE: &str = "\
help: help [name]

    Display information about builtin commands.

    Without 'name', print a summary of every builtin command.";

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }

    /// Usage text for `topic`, or the summary for unknown topics.
    pub fn text(&self, topic: Option<&str>) -> &'static str {
        match topic {
            Some("cd") => CD_USAGE,
            Some("exit") => EXIT_USAGE,
            Some("which") => WHICH_USAGE,
            Some("history") => HISTORY_USAGE,
            Some("help") => HELP_USAGE,
            _ => SUMMARY,
        }
    }
}

impl Command for HelpCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        writeln!(out, "{}", self.text(args.get(1).map(String::as_str)))?;
        Ok(ExecutionOutcome::Completed)
    }
}
