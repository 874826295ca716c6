//! Test doubles for the infrastructure traits

use crate::error::{BlogsyncError, Result};
use crate::infrastructure::{Cmd, CommandRunner, Execution, Fetcher, MessageSource, Stdout};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Records every command and answers from a scripted table.
///
/// One-shot answers are used first, then standing answers. Unscripted
/// commands succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<Cmd>,
    responses: Vec<(String, Execution)>,
    once: Vec<(String, Execution)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        RecordingRunner::default()
    }

    /// Answer `command` (rendered form) with `stdout`
    pub fn stdout(mut self, command: &str, stdout: &str) -> Self {
        self.responses.push((
            command.to_string(),
            Execution {
                stdout: stdout.to_string(),
                ..Execution::success()
            },
        ));
        self
    }

    /// Answer only the next run of `command` with `stdout`
    pub fn stdout_once(mut self, command: &str, stdout: &str) -> Self {
        self.once.push((
            command.to_string(),
            Execution {
                stdout: stdout.to_string(),
                ..Execution::success()
            },
        ));
        self
    }

    /// Make `command` exit with status 1
    pub fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.responses.push((
            command.to_string(),
            Execution {
                code: Some(1),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        ));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.iter().map(|c| c.to_string()).collect()
    }

    pub fn ran(&self, command: &str) -> bool {
        self.calls.iter().any(|c| c.to_string() == command)
    }

    pub fn position(&self, command: &str) -> Option<usize> {
        self.calls.iter().position(|c| c.to_string() == command)
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&mut self, cmd: &Cmd, _stdout: Stdout) -> Result<Execution> {
        self.calls.push(cmd.clone());
        let rendered = cmd.to_string();
        if let Some(index) = self.once.iter().position(|(command, _)| *command == rendered) {
            return Ok(self.once.remove(index).1);
        }
        Ok(self
            .responses
            .iter()
            .rev()
            .find(|(command, _)| *command == rendered)
            .map(|(_, exec)| exec.clone())
            .unwrap_or_else(Execution::success))
    }
}

/// Counts prompts and hands out a fixed answer
#[derive(Debug, Default)]
pub struct CountingPrompt {
    pub answer: String,
    pub asked: usize,
}

impl CountingPrompt {
    pub fn answering(answer: &str) -> Self {
        CountingPrompt {
            answer: answer.to_string(),
            asked: 0,
        }
    }
}

impl MessageSource for CountingPrompt {
    fn commit_message(&mut self) -> Result<String> {
        self.asked += 1;
        Ok(self.answer.clone())
    }
}

/// Writes a fixed body instead of downloading
#[derive(Debug, Default)]
pub struct StubFetcher {
    pub downloads: Vec<(String, PathBuf)>,
    pub fail: bool,
}

impl Fetcher for StubFetcher {
    fn download(&mut self, url: &str, dest: &Path) -> Result<()> {
        self.downloads.push((url.to_string(), dest.to_path_buf()));
        if self.fail {
            return Err(BlogsyncError::Fetch(format!("{}: HTTP 404 Not Found", url)));
        }
        fs::write(dest, "theme = \"terminal\"\n")?;
        Ok(())
    }
}

/// In-memory log sink shared between a subscriber and the test
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Run `f` with a plain-text subscriber writing into this buffer
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
