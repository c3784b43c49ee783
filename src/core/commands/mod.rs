use std::collections::BTreeMap;
use std::io::Write;

mod builtin;
mod cd;
mod help;
mod history;
mod which;

pub use builtin::{CommentCommand, ExitCommand, RecallCommand, COMMENT, RECALL};
pub use cd::CdCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use which::WhichCommand;

use crate::core::ShellState;
use crate::input::history::HistoryError;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    DirectoryChange {
        target: String,
        source: std::io::Error,
    },
    ChildProcess(ProcessError),
    History(HistoryError),
    InvalidArguments(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "{}: command not found", cmd),
            CommandError::DirectoryChange { target, source } => {
                write!(f, "cd: {}: {}", target, source)
            }
            CommandError::ChildProcess(err) => write!(f, "{}", err),
            CommandError::History(err) => write!(f, "history: {}", err),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            // Output stream failures are ours, not the child's.
            ProcessError::Io(e) => CommandError::IoError(e),
            spawn => CommandError::ChildProcess(spawn),
        }
    }
}

impl From<HistoryError> for CommandError {
    fn from(err: HistoryError) -> Self {
        CommandError::History(err)
    }
}

/// What the caller should do once a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Completed,
    /// Re-run the most recent history entry.
    Recall,
    /// Terminate the shell with this status; history is already saved.
    Exit(i32),
}

pub trait Command {
    /// `args[0]` is the command name itself.
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Which(WhichCommand),
    Help(HelpCommand),
    History(HistoryCommand),
    Comment(CommentCommand),
    Recall(RecallCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Which(cmd) => cmd.execute(args, state, out),
            CommandType::Help(cmd) => cmd.execute(args, state, out),
            CommandType::History(cmd) => cmd.execute(args, state, out),
            CommandType::Comment(cmd) => cmd.execute(args, state, out),
            CommandType::Recall(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Runs one tokenized command: a builtin from the table, or the first
/// search path match for anything else.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("which", CommandType::Which(WhichCommand::new()));
        commands.insert("help", CommandType::Help(HelpCommand::new()));
        commands.insert("history", CommandType::History(HistoryCommand::new()));
        commands.insert(COMMENT, CommandType::Comment(CommentCommand::new()));
        commands.insert(RECALL, CommandType::Recall(RecallCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        let Some(name) = args.first() else {
            return Ok(ExecutionOutcome::Completed);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            tracing::debug!("builtin {}", name);
            return cmd.execute(args, state, out);
        }

        let program = state
            .resolver()
            .first(name)
            .ok_or_else(|| CommandError::NotFound(name.clone()))?;

        // Empty tokens from repeated spaces are not passed on as arguments.
        let program_args: Vec<&str> = args[1..]
            .iter()
            .map(String::as_str)
            .filter(|arg| !arg.is_empty())
            .collect();

        // The child's status is logged but not carried into the shell's own.
        let status = self.process_executor.run(&program, &program_args, out)?;
        tracing::debug!("{} finished with {}", name, status);
        Ok(ExecutionOutcome::Completed)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
