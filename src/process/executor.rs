use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Runs one external program to completion.
///
/// The child's stdout and stderr are captured rather than inherited and
/// copied to `out` once it has exited, stdout first.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn run(
        &self,
        program: &Path,
        args: &[&str],
        out: &mut dyn Write,
    ) -> Result<ExitStatus, ProcessError> {
        tracing::debug!("spawning {} with {:?}", program.display(), args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        out.write_all(&output.stdout)?;
        out.write_all(&output.stderr)?;
        out.flush()?;

        if !output.status.success() {
            tracing::debug!("{} exited with {}", program.display(), output.status);
        }
        Ok(output.status)
    }
}
