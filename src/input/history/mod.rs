mod file_ops;

use std::{fmt, path::PathBuf};

use self::file_ops::FileOps;

#[derive(Debug)]
pub enum HistoryError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Io { source, .. } => Some(source),
        }
    }
}

/// Ordered log of raw input lines, persisted to a plain text file.
///
/// Entries are kept exactly as entered, blank ones included, so that a
/// `save` followed by a `load` reproduces the same sequence.
pub struct History {
    entries: Vec<String>,
    file_ops: FileOps,
}

impl History {
    pub fn new(history_file: PathBuf) -> Self {
        History {
            entries: Vec::new(),
            file_ops: FileOps::new(history_file),
        }
    }

    pub fn load(&mut self) -> Result<(), HistoryError> {
        self.entries = self.file_ops.load_entries()?;
        tracing::debug!(
            "loaded {} history entries from {}",
            self.entries.len(),
            self.file_ops.path().display()
        );
        Ok(())
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        self.file_ops.save_entries(&self.entries)?;
        tracing::debug!(
            "saved {} history entries to {}",
            self.entries.len(),
            self.file_ops.path().display()
        );
        Ok(())
    }

    pub fn add(&mut self, entry: &str) {
        self.entries.push(entry.to_owned());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_path(&self) -> &std::path::Path {
        self.file_ops.path()
    }
}
