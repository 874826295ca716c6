//! Commit message input

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Supplies the message for a commit
pub trait MessageSource {
    fn commit_message(&mut self) -> Result<String>;
}

impl<T: MessageSource + ?Sized> MessageSource for Box<T> {
    fn commit_message(&mut self) -> Result<String> {
        (**self).commit_message()
    }
}

/// Asks on the terminal and reads one line from stdin
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl MessageSource for StdinPrompt {
    fn commit_message(&mut self) -> Result<String> {
        let stdin = io::stdin();
        read_message(&mut stdin.lock(), &mut io::stdout())
    }
}

/// Message given up front (`--message`)
#[derive(Debug, Clone)]
pub struct FixedMessage(pub String);

impl MessageSource for FixedMessage {
    fn commit_message(&mut self) -> Result<String> {
        Ok(self.0.clone())
    }
}

fn read_message<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Enter the commit message: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
