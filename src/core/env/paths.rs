use super::EnvError;
use std::env;
use std::path::PathBuf;

pub const HISTORY_FILE_NAME: &str = ".kshell_history";

/// Locations the shell derives from the environment once at startup.
#[derive(Debug, Clone)]
pub struct EnvPaths {
    home: PathBuf,
    history_file: PathBuf,
    search_path: Vec<PathBuf>,
}

impl EnvPaths {
    pub fn new(history_override: Option<PathBuf>) -> Result<Self, EnvError> {
        let home = dirs::home_dir().ok_or(EnvError::HomeDirNotFound)?;
        if !home.is_dir() {
            return Err(EnvError::InvalidPath(home));
        }

        let history_file = history_override.unwrap_or_else(|| home.join(HISTORY_FILE_NAME));
        let search_path = env::var("PATH")
            .map(|value| search_path_from(&value))
            .unwrap_or_default();

        Ok(Self {
            home,
            history_file,
            search_path,
        })
    }

    pub fn into_parts(self) -> (PathBuf, PathBuf, Vec<PathBuf>) {
        (self.home, self.history_file, self.search_path)
    }
}

/// Splits a `PATH`-style value, dropping empty entries.
pub fn search_path_from(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}
