//! Execution of rendered scripts through a mongosh-compatible shell.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::{Error, MongoScript, Result, TRACING_TARGET_SHELL};

/// Shell binary used when none is configured.
pub const DEFAULT_SHELL: &str = "mongosh";

/// Captured result of a successful shell run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// Exit code of the shell.
    pub code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// A mongosh-compatible shell.
///
/// Scripts are spooled to a temporary file and passed with
/// `--nodb --quiet --file <path>`; the script opens its own connection.
#[derive(Debug, Clone)]
pub struct MongoShell {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Default for MongoShell {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl MongoShell {
    /// Creates a shell runner for the given binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: vec!["--nodb".into(), "--quiet".into()],
        }
    }

    /// Replaces the arguments placed before `--file <path>`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the shell binary.
    #[inline]
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// Runs a rendered script and waits for the shell to exit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the script cannot be spooled or the shell
    /// cannot be spawned, and [`Error::Shell`] if it exits unsuccessfully.
    #[tracing::instrument(skip(self, script), target = TRACING_TARGET_SHELL, fields(program = %self.program.display(), mode = %script.mode()))]
    pub async fn run(&self, script: &MongoScript) -> Result<ShellOutput> {
        let file = script.spool()?;

        tracing::info!(target: TRACING_TARGET_SHELL, "Executing user management script");

        let start = Instant::now();
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--file")
            .arg(file.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                tracing::error!(target: TRACING_TARGET_SHELL, error = %e, "Failed to spawn shell");
                Error::Io(e)
            })?;

        drop(file);
        let elapsed = start.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::error!(
                target: TRACING_TARGET_SHELL,
                code = ?output.status.code(),
                stderr = %stderr.trim(),
                elapsed = ?elapsed,
                "Shell exited unsuccessfully"
            );
            return Err(Error::Shell {
                code: output.status.code(),
                stderr,
            });
        }

        tracing::info!(target: TRACING_TARGET_SHELL, elapsed = ?elapsed, "Script executed");

        Ok(ShellOutput {
            code: output.status.code().unwrap_or_default(),
            stdout,
            stderr,
        })
    }
}
