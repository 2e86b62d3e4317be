//! # Terminal Input Helper
//!
//! This module provides utilities for interacting with the terminal to
//! request user input. It repeatedly prompts the user until the input
//! satisfies the provided validation filters.
//!
//! The core functionality relies on [`Sanitize`] for input validation and on
//! a bounded line reader: every read keeps at most a fixed number of bytes
//! and consumes (but never stores) the rest of the line, so a pasted wall of
//! text cannot grow a buffer past its limit or leak into the next prompt.
//!
//! ## Features
//! - Continuously prompts the user until valid input is received.
//! - Supports multiple validation rules simultaneously.
//! - Bounded reads with overflow discard, capped at [`MAX_LINE_LEN`] bytes.
//! - A y/n confirmation helper and a "press ENTER" pause helper.
//! - Reader and writer are injectable, so the whole loop is testable.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use menuloop::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//!
//! let answer = terminal
//!     .ask(
//!         "Continue? (y/n): ",
//!         &[Sanitize::MatchStrings(vec!["y".to_string(), "n".to_string()])],
//!     )
//!     .unwrap();
//!
//! println!("The input: {answer}");
//! ```

use crate::utils::sanitize::Sanitize;
use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Write};

/// Upper bound on the number of bytes kept from a single line of input.
/// Anything past this is consumed and discarded.
pub const MAX_LINE_LEN: usize = 8192;

/// Bytes kept when reading a y/n confirmation answer.
pub const CONFIRM_INPUT_LIMIT: usize = 7;

/// One line of input as returned by [`Terminal::read_bounded`]: the bytes
/// that were kept and the number of bytes that were read and thrown away.
#[derive(Debug, PartialEq, Eq)]
pub struct BoundedLine {
    pub text: String,
    pub discarded: usize,
}

/// Represents an error raised while talking to the terminal.
///
/// - `Io`: the underlying reader or writer failed.
/// - `Eof`: the input stream ended with nothing left to read, so no amount
///   of re-prompting can ever produce an answer.
#[derive(Debug)]
pub enum TerminalError {
    Io(io::Error),
    Eof,
}

impl Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Couldn't read or write to the terminal: {}", e),
            Self::Eof => write!(
                f,
                "The input stream was closed before an answer was received"
            ),
        }
    }
}

impl Error for TerminalError {}

impl From<io::Error> for TerminalError {
    fn from(e: io::Error) -> Self {
        TerminalError::Io(e)
    }
}

/// A helper for repeatedly asking the user for input until it passes all
/// [`Sanitize`] filters. Internally calls [`Sanitize::execute`] on every
/// line read.
///
/// The terminal owns its reader and writer. [`Terminal::stdio`] wires it to
/// the process's stdin/stdout; [`Terminal::new`] accepts any `BufRead` and
/// `Write` pair, which is how the tests drive scripted sessions.
pub struct Terminal {
    reader: Box<dyn BufRead>,
    writer: Box<dyn Write>,
}

impl Terminal {
    /// Creates a terminal over the given reader and writer.
    pub fn new(reader: impl BufRead + 'static, writer: impl Write + 'static) -> Terminal {
        Terminal {
            reader: Box::new(reader),
            writer: Box::new(writer),
        }
    }

    /// Creates a terminal over the process's stdin and stdout.
    pub fn stdio() -> Terminal {
        Terminal::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Writes one line to the terminal.
    pub fn say(&mut self, line: impl Display) -> Result<(), TerminalError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes a prompt without a trailing newline, so the cursor stays on
    /// the same line as the question.
    fn prompt(&mut self, question: &str) -> Result<(), TerminalError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads one line, keeping at most `limit` bytes of it.
    ///
    /// The rest of the line is consumed and counted but never stored, so the
    /// next read starts on a fresh line. `limit` is clamped to
    /// `1..=MAX_LINE_LEN`. A line terminated by end-of-input instead of a
    /// newline is returned normally; [`TerminalError::Eof`] is returned only
    /// when the stream ends before any byte of the line was read.
    pub fn read_bounded(&mut self, limit: usize) -> Result<BoundedLine, TerminalError> {
        let limit = limit.clamp(1, MAX_LINE_LEN);
        let mut kept: Vec<u8> = Vec::new();
        let mut discarded = 0usize;
        let mut saw_input = false;
        let mut saw_newline = false;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                if !saw_input {
                    return Err(TerminalError::Eof);
                }
                break;
            }
            saw_input = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let line_part = match newline {
                Some(pos) => &available[..pos],
                None => available,
            };

            for &byte in line_part {
                if kept.len() < limit {
                    kept.push(byte);
                } else {
                    discarded += 1;
                }
            }

            let consumed = line_part.len() + usize::from(newline.is_some());
            saw_newline = newline.is_some();
            self.reader.consume(consumed);

            if saw_newline {
                break;
            }
        }

        // Lines produced by terminals in raw-crlf environments end in \r\n.
        if saw_newline && kept.last() == Some(&b'\r') {
            kept.pop();
        }

        Ok(BoundedLine {
            text: String::from_utf8_lossy(&kept).into_owned(),
            discarded,
        })
    }

    /// Consumes the rest of the current line without storing any of it.
    /// Reaching end-of-input is not an error here.
    pub fn discard_line(&mut self) -> Result<(), TerminalError> {
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }

            let (skip, done) = match available.iter().position(|&b| b == b'\n') {
                Some(pos) => (pos + 1, true),
                None => (available.len(), false),
            };
            self.reader.consume(skip);

            if done {
                return Ok(());
            }
        }
    }

    /// Prints a question to the terminal and loops until a valid answer is
    /// received. Returns the accepted answer.
    pub fn ask(&mut self, question: &str, filters: &[Sanitize]) -> Result<String, TerminalError> {
        self.ask_bounded(question, filters, MAX_LINE_LEN)
    }

    /// Same as [`Terminal::ask`], but keeps at most `limit` bytes of each
    /// answer. Input past the limit is discarded before validation, so an
    /// oversized answer is validated by its kept prefix.
    pub fn ask_bounded(
        &mut self,
        question: &str,
        filters: &[Sanitize],
        limit: usize,
    ) -> Result<String, TerminalError> {
        loop {
            self.prompt(question)?;
            let line = self.read_bounded(limit)?;

            match Sanitize::execute(&line.text, filters) {
                Ok(answer) => return Ok(answer),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Asks the given question until the answer is exactly `y` or `n`.
    /// Returns `true` for `y`.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, TerminalError> {
        let filters = [Sanitize::MatchStrings(vec![
            "y".to_string(),
            "n".to_string(),
        ])];
        let answer = self.ask_bounded(prompt, &filters, CONFIRM_INPUT_LIMIT)?;
        Ok(answer == "y")
    }

    /// Prints a prompt and waits for the user to press ENTER, discarding
    /// whatever else was typed on that line.
    pub fn pause(&mut self, prompt: &str) -> Result<(), TerminalError> {
        self.prompt(prompt)?;
        self.discard_line()
    }
}
