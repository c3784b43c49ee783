use std::io::{self, Write};
use std::path::PathBuf;

use rustyline::{error::ReadlineError, DefaultEditor};

pub mod dispatcher;
pub mod session;

use crate::{
    core::{commands::ExecutionOutcome, ShellState},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::history::HistoryError,
};

pub use dispatcher::Dispatcher;
pub use session::Session;

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) session: Session,
    pub(crate) flags: Flags,
    pub(crate) highlighter: Highlighter,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;

        let history_override = flags.get_value("history").map(PathBuf::from);
        let state = ShellState::from_env(history_override)?;

        // Seed line editing with the persisted log so arrow keys reach it.
        for entry in state.history().entries() {
            if !entry.trim().is_empty() {
                editor.add_history_entry(entry.as_str())?;
            }
        }

        let quiet = flags.is_set("quiet");
        ctrlc::set_handler(move || {
            if !quiet {
                println!("\nUse 'exit' to exit the shell");
            }
        })?;

        Ok(Shell {
            editor,
            session: Session::new(state),
            flags,
            highlighter: Highlighter::new(),
        })
    }

    /// Runs until `exit` or end of input and returns the status the process
    /// should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = self.session.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!("couldn't add to line editor history: {}", e);
                    }

                    // Unlocked handle: each write takes the lock, so the
                    // Ctrl-C hint is not held up while a child runs.
                    let mut stdout = io::stdout();
                    match self.session.handle_line(&line, &mut stdout) {
                        Ok(ExecutionOutcome::Exit(code)) => return Ok(code),
                        Ok(_) => {}
                        Err(e) => self.report(&e),
                    }
                    if let Err(e) = stdout.flush() {
                        self.report(&e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    self.notice("CTRL-C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    self.notice("CTRL-D");
                    break;
                }
                // The input channel is unusable; treat it like end of input.
                Err(e) => {
                    self.report(&e);
                    break;
                }
            }
        }

        Ok(end_session(&self.session, &mut |e| self.report(e)))
    }

    fn report(&self, error: &dyn std::fmt::Display) {
        eprintln!("{}", self.highlighter.highlight_error(&error.to_string()));
    }

    fn notice(&self, message: &str) {
        if !self.flags.is_set("quiet") {
            println!("{}", self.highlighter.highlight_hint(message));
        }
    }
}

/// Saves history at end of input and returns the status to exit with. A
/// failed save goes to `report` and leaves the status alone.
fn end_session(session: &Session, report: &mut dyn FnMut(&HistoryError)) -> i32 {
    if let Err(e) = session.finish() {
        report(&e);
    }
    session.state().last_status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{cwd_lock, test_state};
    use crate::input::History;
    use std::fs;

    #[test]
    fn test_end_of_input_saves_and_keeps_status() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let mut session = Session::new(test_state(home.path(), Vec::new()));
        let mut out: Vec<u8> = Vec::new();

        session.handle_line("help", &mut out).unwrap();
        let _ = session.handle_line("bogus123", &mut out);

        let mut reports = Vec::new();
        let status = end_session(&session, &mut |e| reports.push(e.to_string()));

        assert_eq!(status, 1);
        assert!(reports.is_empty());
        assert_eq!(
            fs::read_to_string(session.state().history().file_path()).unwrap(),
            "help\nbogus123\n"
        );
    }

    #[test]
    fn test_end_of_input_reports_failed_save() {
        let _guard = cwd_lock();
        let home = tempfile::tempdir().unwrap();
        let history = History::new(home.path().join("missing").join(".kshell_history"));
        let state = ShellState::new(
            "kien".to_string(),
            "devbox".to_string(),
            home.path().to_path_buf(),
            Vec::new(),
            history,
        )
        .unwrap();
        let mut session = Session::new(state);
        let mut out: Vec<u8> = Vec::new();
        session.handle_line("# note", &mut out).unwrap();

        let mut reports = Vec::new();
        let status = end_session(&session, &mut |e| reports.push(e.to_string()));

        assert_eq!(status, 0);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains(".kshell_history"));
    }
}
