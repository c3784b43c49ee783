use crate::core::commands::CommandError;
use crate::core::env::EnvError;
use crate::input::history::HistoryError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    HomeDirNotFound,
    Command(CommandError),
    History(HistoryError),
    Env(EnvError),
    FlagError(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<HistoryError> for ShellError {
    fn from(err: HistoryError) -> Self {
        ShellError::History(err)
    }
}

impl From<EnvError> for ShellError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::HomeDirNotFound => ShellError::HomeDirNotFound,
            other => ShellError::Env(other),
        }
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::HomeDirNotFound => write!(f, "Home directory not found"),
            // Command errors already read as user-facing shell messages.
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::History(e) => write!(f, "History error: {}", e),
            ShellError::Env(e) => write!(f, "Environment error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
