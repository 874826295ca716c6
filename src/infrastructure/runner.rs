//! External command execution.
//!
//! Every interaction with git, rsync, hugo and the link rewriter goes through
//! a [`CommandRunner`]. Commands are built with [`Cmd`]:
//!
//! ```ignore
//! let cmd = Cmd::new("git").args(["push", "origin", "main"]).cwd(&site);
//! runner.run(&cmd)?;
//! ```

use crate::error::{BlogsyncError, Result};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Cmd {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Cmd {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Path argument, rendered lossily
    pub fn path_arg<P: AsRef<Path>>(self, path: P) -> Self {
        let rendered = path.as_ref().to_string_lossy().to_string();
        self.arg(rendered)
    }

    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// How a command's stdout is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stdout {
    /// Passed through to the terminal
    Inherit,
    /// Collected and returned
    Capture,
}

/// Result of running a command to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// Trimmed stdout (empty unless captured)
    pub stdout: String,
    /// Trimmed stderr
    pub stderr: String,
}

impl Execution {
    pub fn success() -> Self {
        Execution {
            code: Some(0),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes external commands.
///
/// Implementors only provide [`CommandRunner::execute`]; the checked variants
/// are shared.
pub trait CommandRunner {
    /// Run `cmd` to completion. Errors only when the process cannot start.
    fn execute(&mut self, cmd: &Cmd, stdout: Stdout) -> Result<Execution>;

    /// Run `cmd`, failing on a non-zero exit.
    fn run(&mut self, cmd: &Cmd) -> Result<()> {
        self.checked(cmd, Stdout::Inherit).map(|_| ())
    }

    /// Run `cmd` and return its trimmed stdout, failing on a non-zero exit.
    fn capture(&mut self, cmd: &Cmd) -> Result<String> {
        self.checked(cmd, Stdout::Capture).map(|exec| exec.stdout)
    }

    /// Run `cmd` and report whether it succeeded.
    fn probe(&mut self, cmd: &Cmd) -> Result<bool> {
        info!("Running command: {}", cmd);
        Ok(self.execute(cmd, Stdout::Capture)?.is_success())
    }

    #[doc(hidden)]
    fn checked(&mut self, cmd: &Cmd, stdout: Stdout) -> Result<Execution> {
        info!("Running command: {}", cmd);
        let exec = self.execute(cmd, stdout)?;
        if exec.is_success() {
            return Ok(exec);
        }

        Err(BlogsyncError::CommandFailed {
            command: cmd.to_string(),
            code: exec.code,
            stderr: exec.stderr,
        })
    }
}

/// Runs commands as real child processes, blocking until they exit.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn execute(&mut self, cmd: &Cmd, stdout: Stdout) -> Result<Execution> {
        let mut command = Command::new(cmd.program());
        command.args(cmd.get_args()).stdin(Stdio::null()).stderr(Stdio::piped());
        command.stdout(match stdout {
            Stdout::Inherit => Stdio::inherit(),
            Stdout::Capture => Stdio::piped(),
        });
        if let Some(dir) = cmd.get_cwd() {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| {
            BlogsyncError::Io(io::Error::new(
                e.kind(),
                format!("Failed to start `{}`: {}", cmd, e),
            ))
        })?;

        let exec = Execution {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };
        if exec.is_success() && !exec.stderr.is_empty() {
            debug!("{}: {}", cmd.program(), exec.stderr);
        }
        Ok(exec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::LogBuffer;
    use tempfile::TempDir;

    #[test]
    fn test_display_quotes_whitespace_args() {
        let cmd = Cmd::new("git").args(["commit", "-m", "new post"]);
        assert_eq!(cmd.to_string(), "git commit -m \"new post\"");
    }

    #[test]
    fn test_display_plain_args() {
        let cmd = Cmd::new("git").args(["push", "origin", "main"]);
        assert_eq!(cmd.to_string(), "git push origin main");
    }

    #[test]
    fn test_builder_keeps_cwd() {
        let cmd = Cmd::new("hugo").cwd("/blog");
        assert_eq!(cmd.get_cwd(), Some(Path::new("/blog")));
        assert!(cmd.get_args().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_capture_trims_stdout() {
        let mut runner = SystemRunner::new();
        let out = runner
            .capture(&Cmd::new("sh").args(["-c", "printf '  origin\\n\\n'"]))
            .unwrap();
        assert_eq!(out, "origin");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_run_failure_carries_stderr() {
        let mut runner = SystemRunner::new();
        let err = runner
            .run(&Cmd::new("sh").args(["-c", "echo boom >&2; exit 3"]))
            .unwrap_err();
        match err {
            BlogsyncError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_probe_reports_status() {
        let mut runner = SystemRunner::new();
        assert!(runner.probe(&Cmd::new("sh").args(["-c", "exit 0"])).unwrap());
        assert!(!runner.probe(&Cmd::new("sh").args(["-c", "exit 1"])).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runs_in_cwd() {
        let temp = TempDir::new().unwrap();
        let mut runner = SystemRunner::new();
        runner
            .run(&Cmd::new("sh").args(["-c", "touch marker"]).cwd(temp.path()))
            .unwrap();
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn test_spawn_failure_is_io_error() {
        let mut runner = SystemRunner::new();
        let err = runner
            .run(&Cmd::new("blogsync-definitely-not-a-real-program"))
            .unwrap_err();
        assert!(matches!(err, BlogsyncError::Io(_)));
        assert!(err
            .to_string()
            .contains("Failed to start `blogsync-definitely-not-a-real-program`"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_is_returned_not_logged() {
        let logs = LogBuffer::default();
        let result = logs.capture(|| {
            SystemRunner::new().run(&Cmd::new("sh").args(["-c", "echo boom >&2; exit 3"]))
        });
        assert!(result.is_err());

        let logged = logs.contents();
        assert!(logged.contains("Running command: sh -c"));
        assert!(!logged.contains("ERROR"));
    }
}
