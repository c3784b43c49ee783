mod identity;
mod paths;

pub use identity::{current_user, hostname};
pub use paths::{search_path_from, EnvPaths, HISTORY_FILE_NAME};

use std::path::PathBuf;

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    InvalidPath(PathBuf),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "Home directory not found"),
            EnvError::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
        }
    }
}

impl std::error::Error for EnvError {}
