use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::env::{self as shell_env, EnvPaths};
use crate::error::ShellError;
use crate::input::History;
use crate::path::PathResolver;

/// Shell-wide state for one interactive session.
///
/// `current_dir` always mirrors the process working directory after a
/// change made through [`ShellState::change_dir`].
pub struct ShellState {
    user: String,
    hostname: String,
    current_dir: PathBuf,
    previous_dir: PathBuf,
    home_dir: PathBuf,
    search_path: Vec<PathBuf>,
    history: History,
    last_status: i32,
}

impl ShellState {
    pub fn new(
        user: String,
        hostname: String,
        home_dir: PathBuf,
        search_path: Vec<PathBuf>,
        history: History,
    ) -> Result<Self, ShellError> {
        let current_dir = env::current_dir()?;

        Ok(Self {
            user,
            hostname,
            previous_dir: current_dir.clone(),
            current_dir,
            home_dir,
            search_path,
            history,
            last_status: 0,
        })
    }

    /// Captures identity, directories and search path from the process
    /// environment, then restores the persisted history.
    pub fn from_env(history_override: Option<PathBuf>) -> Result<Self, ShellError> {
        let (home_dir, history_file, search_path) = EnvPaths::new(history_override)?.into_parts();

        let mut history = History::new(history_file);
        if let Err(e) = history.load() {
            tracing::warn!("starting with empty history: {}", e);
        }

        Self::new(
            shell_env::current_user(),
            shell_env::hostname(),
            home_dir,
            search_path,
            history,
        )
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.user,
            self.hostname,
            self.current_dir.display()
        )
    }

    /// Moves the process into `target`, relative paths resolving against the
    /// current directory. Nothing changes when the move fails, and an empty
    /// target always fails.
    pub fn change_dir(&mut self, target: &Path) -> io::Result<()> {
        if target.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }

        let target = self.current_dir.join(target);
        if !target.is_dir() {
            let reason = if target.exists() {
                "Not a directory"
            } else {
                "No such file or directory"
            };
            return Err(io::Error::new(io::ErrorKind::NotFound, reason));
        }

        env::set_current_dir(&target)?;
        let new_dir = env::current_dir()?;
        tracing::debug!(
            "directory change {} -> {}",
            self.current_dir.display(),
            new_dir.display()
        );

        self.previous_dir = std::mem::replace(&mut self.current_dir, new_dir);
        Ok(())
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn previous_dir(&self) -> &Path {
        &self.previous_dir
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.search_path)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn set_last_status(&mut self, status: i32) {
        self.last_status = status;
    }
}

/// Serializes tests that move the process working directory or spawn
/// children from freshly written scripts.
#[cfg(test)]
pub(crate) fn cwd_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;

    static CWD: Mutex<()> = Mutex::new(());
    CWD.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// State rooted in throwaway directories, for tests across the crate.
#[cfg(test)]
pub(crate) fn test_state(home: &Path, search_path: Vec<PathBuf>) -> ShellState {
    let history = History::new(home.join(crate::core::env::HISTORY_FILE_NAME));
    ShellState::new(
        "kien".to_string(),
        "devbox".to_string(),
        home.to_path_buf(),
        search_path,
        history,
    )
    .unwrap()
}
