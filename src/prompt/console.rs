//! Terminal I/O seam shared by every prompt.
//!
//! Prompts never touch stdin/stdout directly. They talk to a [`Console`], which
//! lets the same loop run against an interactive terminal (`dialoguer`), a piped
//! stdin, or an in-memory buffer in tests.

use crate::error::{PromptError, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, Write};

/// Line-oriented terminal access used by the prompt loops.
pub trait Console {
    /// Shows `prompt` and reads one line, without its trailing newline.
    ///
    /// Returns [`PromptError::InputClosed`] once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes an informational line.
    fn show(&mut self, line: &str) -> Result<()>;

    /// Writes a rejection or warning line.
    fn warn(&mut self, line: &str) -> Result<()>;
}

/// Interactive console backed by `dialoguer`.
pub struct TerminalConsole {
    theme: ColorfulTheme,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        // The theme draws its own separator after the prompt
        let prompt = prompt.trim_end().trim_end_matches(':');
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn show(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        println!("{}", line.red());
        Ok(())
    }
}

/// Plain console over any reader/writer pair.
///
/// Used for piped input and, with in-memory buffers, for tests.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Everything written so far.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
