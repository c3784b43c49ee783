use std::fmt;
use std::path::PathBuf;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    Io(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn { program, source } => {
                write!(f, "{}: {}", program.display(), source)
            }
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
