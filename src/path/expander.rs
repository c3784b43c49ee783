use std::path::{Path, PathBuf};

/// Expands a leading `~` against the session's home directory.
#[derive(Clone)]
pub struct PathExpander<'a> {
    home: &'a Path,
}

impl<'a> PathExpander<'a> {
    pub fn new(home: &'a Path) -> Self {
        Self { home }
    }

    pub fn expand(&self, path: &str) -> PathBuf {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Path::new(path).to_path_buf()
        }
    }

    fn expand_tilde(&self, path: &str) -> PathBuf {
        if path.len() == 1 {
            return self.home.to_path_buf();
        }

        match path[1..].strip_prefix('/') {
            Some(stripped) => {
                let mut home_path = self.home.to_path_buf();
                for part in stripped.split('/').filter(|part| !part.is_empty()) {
                    home_path.push(part);
                }
                home_path
            }
            // "~user" forms are left alone
            None => Path::new(path).to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let expander = PathExpander::new(Path::new("/home/kien"));
        assert_eq!(expander.expand("~"), PathBuf::from("/home/kien"));
        assert_eq!(expander.expand("~/src//kshell"), PathBuf::from("/home/kien/src/kshell"));
    }

    #[test]
    fn test_leaves_other_paths() {
        let expander = PathExpander::new(Path::new("/home/kien"));
        assert_eq!(expander.expand("/tmp"), PathBuf::from("/tmp"));
        assert_eq!(expander.expand("relative/dir"), PathBuf::from("relative/dir"));
        assert_eq!(expander.expand("~other"), PathBuf::from("~other"));
    }
}
