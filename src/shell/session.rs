use std::io::Write;

use crate::core::commands::{CommandError, ExecutionOutcome};
use crate::core::ShellState;
use crate::input::history::HistoryError;

use super::dispatcher::Dispatcher;

/// Everything the REPL needs between reading a line and reading the next.
pub struct Session {
    state: ShellState,
    dispatcher: Dispatcher,
}

impl Session {
    pub fn new(state: ShellState) -> Self {
        Self {
            state,
            dispatcher: Dispatcher::new(),
        }
    }

    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    /// Blank lines never reach the dispatcher. The last status becomes 0 on
    /// success and 1 on a reported failure.
    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
    ) -> Result<ExecutionOutcome, CommandError> {
        if line.trim().is_empty() {
            return Ok(ExecutionOutcome::Completed);
        }

        let result = self.dispatcher.dispatch(line, &mut self.state, out);
        self.state.set_last_status(if result.is_ok() { 0 } else { 1 });
        result
    }

    /// Saves history at end of input.
    pub fn finish(&self) -> Result<(), HistoryError> {
        self.state.history().save()
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{cwd_lock, test_state};
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn session(home: &Path, search_path: Vec<std::path::PathBuf>) -> Session {
        Session::new(test_state(home, search_path))
    }

    #[test]
    fn test_blank_lines_skip_dispatch() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let mut session = session(home.path(), Vec::new());
        let mut out: Vec<u8> = Vec::new();

        for line in ["", " ", "\t", "   \t  "] {
            assert_eq!(
                session.handle_line(line, &mut out).unwrap(),
                ExecutionOutcome::Completed
            );
        }

        assert!(session.state().history().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_history_in_submission_order() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let mut session = session(home.path(), Vec::new());
        let mut out: Vec<u8> = Vec::new();

        let lines = ["help", "which nothing", "# note", "bogus123"];
        for line in lines {
            let _ = session.handle_line(line, &mut out);
        }

        out.clear();
        session.handle_line("history", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1: help\n2: which nothing\n3: # note\n4: bogus123\n"
        );
    }

    #[test]
    fn test_echo_scenario() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let echo = bin.path().join("echo");
        fs::write(&echo, "#!/bin/sh\nprintf '%s\\n' \"$*\"\n").unwrap();
        fs::set_permissions(&echo, fs::Permissions::from_mode(0o755)).unwrap();

        let mut session = session(home.path(), vec![bin.path().to_path_buf()]);
        let mut out: Vec<u8> = Vec::new();

        session.handle_line("which echo", &mut out).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), format!("{}\n", echo.display()));

        out.clear();
        session.handle_line("echo hi", &mut out).unwrap();
        assert_eq!(out, b"hi\n");
        assert_eq!(session.state().history().entries().last().map(String::as_str), Some("echo hi"));
    }

    #[test]
    fn test_command_not_found_scenario() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let mut session = session(home.path(), vec![home.path().to_path_buf()]);
        let mut out: Vec<u8> = Vec::new();

        let result = session.handle_line("bogus123", &mut out);

        assert!(matches!(result, Err(CommandError::NotFound(_))));
        assert_eq!(session.state().last_status(), 1);
        assert_eq!(session.state().history().entries(), ["bogus123"]);

        session.handle_line("# still running", &mut out).unwrap();
        assert_eq!(session.state().last_status(), 0);
    }

    #[test]
    fn test_cd_round_trip_scenario() {
        let _guard = cwd_lock();
        let start = env::current_dir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        let mut session = session(home.path(), Vec::new());
        let mut out: Vec<u8> = Vec::new();

        let cd_target = format!("cd {}", target.path().display());
        session.handle_line(&cd_target, &mut out).unwrap();
        session.handle_line("cd -", &mut out).unwrap();
        assert_eq!(session.state().current_dir(), start);

        session.handle_line(&cd_target, &mut out).unwrap();
        session.handle_line("cd ~", &mut out).unwrap();
        assert_eq!(session.state().current_dir(), home.path());

        let before = session.state().current_dir().to_path_buf();
        let previous = session.state().previous_dir().to_path_buf();
        assert!(session.handle_line("cd /nonexistent", &mut out).is_err());
        assert_eq!(session.state().current_dir(), before);
        assert_eq!(session.state().previous_dir(), previous);

        env::set_current_dir(start).unwrap();
    }

    #[test]
    fn test_exit_persists_history_scenario() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let mut session = session(home.path(), Vec::new());
        let history_file = session.state().history().file_path().to_path_buf();
        assert!(!history_file.exists());
        let mut out: Vec<u8> = Vec::new();

        session.handle_line("help exit", &mut out).unwrap();
        let outcome = session.handle_line("exit 0", &mut out).unwrap();

        assert_eq!(outcome, ExecutionOutcome::Exit(0));
        assert_eq!(fs::read_to_string(&history_file).unwrap(), "help exit\n");
    }

    #[test]
    fn test_finish_saves_history() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let mut session = session(home.path(), Vec::new());
        let mut out: Vec<u8> = Vec::new();

        session.handle_line("history", &mut out).unwrap();
        session.finish().unwrap();

        let mut restored = crate::input::History::new(
            session.state().history().file_path().to_path_buf(),
        );
        restored.load().unwrap();
        assert_eq!(restored.entries(), session.state().history().entries());
    }
}
