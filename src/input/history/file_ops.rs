use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::HistoryError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads every line verbatim. A missing file is an empty history, and
    /// bytes that are not UTF-8 are replaced rather than failing the load.
    pub fn load_entries(&self) -> Result<Vec<String>, HistoryError> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.file_path).map_err(|e| self.io_error(e))?;
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect())
    }

    /// Replaces the file with one entry per line.
    pub fn save_entries(&self, entries: &[String]) -> Result<(), HistoryError> {
        let file = File::create(&self.file_path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        for entry in entries {
            writeln!(writer, "{}", entry).map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}
