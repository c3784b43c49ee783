use std::io::Write;

use super::{Command, CommandError, ExecutionOutcome};
use crate::core::ShellState;

/// Prints every search path match for each name; names without a match
/// print nothing.
#[derive(Clone, Default)]
pub struct WhichCommand;

impl WhichCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for WhichCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        let resolver = state.resolver();

        for name in args.iter().skip(1) {
            for path in resolver.resolve(name) {
                writeln!(out, "{}", path.display())?;
            }
        }
        Ok(ExecutionOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{cwd_lock, test_state};
    use std::fs;

    fn which(state: &mut ShellState, names: &[&str]) -> String {
        let mut args = vec!["which".to_string()];
        args.extend(names.iter().map(|s| s.to_string()));

        let mut out: Vec<u8> = Vec::new();
        WhichCommand::new().execute(&args, state, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_which_lists_all_matches() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("tool"), "").unwrap();
        fs::write(second.path().join("tool"), "").unwrap();
        let mut state = test_state(
            home.path(),
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        );

        assert_eq!(
            which(&mut state, &["tool"]),
            format!(
                "{}\n{}\n",
                first.path().join("tool").display(),
                second.path().join("tool").display()
            )
        );
    }

    #[test]
    fn test_which_missing_is_silent() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        fs::write(bin.path().join("tool"), "").unwrap();
        let mut state = test_state(home.path(), vec![bin.path().to_path_buf()]);

        assert_eq!(which(&mut state, &["bogus123"]), "");
        assert_eq!(which(&mut state, &[]), "");

        let found = format!("{}\n", bin.path().join("tool").display());
        assert_eq!(which(&mut state, &["bogus123", "tool"]), found);
        assert_eq!(which(&mut state, &["tool", "bogus123"]), found);
    }
}
