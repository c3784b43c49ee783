use std::fs;
use std::path::{Path, PathBuf};

/// Looks up executable names in the ordered search path.
///
/// Matching is on the exact file name: no extension inference and no
/// executable-bit check. Missing directories are skipped.
#[derive(Clone, Copy)]
pub struct PathResolver<'a> {
    dirs: &'a [PathBuf],
}

impl<'a> PathResolver<'a> {
    pub fn new(dirs: &'a [PathBuf]) -> Self {
        Self { dirs }
    }

    /// Every match, in search path order. Empty when nothing matches.
    pub fn resolve(&self, name: &str) -> Vec<PathBuf> {
        if !is_plain_name(name) {
            return Vec::new();
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .filter(|candidate| is_file(candidate))
            .collect()
    }

    pub fn first(&self, name: &str) -> Option<PathBuf> {
        self.resolve(name).into_iter().next()
    }
}

// Names carrying a separator would escape the search directory.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
