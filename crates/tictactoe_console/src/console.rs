//! Line-oriented console seam.
//!
//! The controller only talks to a [`Console`], so games run the same way
//! against a terminal ([`StdConsole`]) or a canned transcript
//! ([`MemoryConsole`]).

use crate::ConsoleError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::instrument;

/// Text output plus blocking line input.
pub trait Console {
    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Shows `prompt` and blocks for one line of input, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError>;
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a console on stdin/stdout.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(std::io::stdout().lock(), "{}", line)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        read_input_line(&mut std::io::stdin().lock())
    }
}

/// Reads one line, replacing invalid UTF-8 instead of failing on it.
///
/// Only a read of zero bytes counts as closed input; garbled bytes come
/// back as text for the caller to reject like any other bad move.
fn read_input_line(reader: &mut impl BufRead) -> Result<String, ConsoleError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(ConsoleError::InputClosed);
    }
    Ok(strip_line_ending(String::from_utf8_lossy(&buf).into_owned()))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// In-memory console: replays queued input and records everything shown.
///
/// Prompts are recorded in the transcript alongside written lines.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl MemoryConsole {
    /// Creates a console that will answer prompts with `input`, in order.
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines and prompts shown so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input lines not yet consumed.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push(prompt.to_string());
        self.input.pop_front().ok_or(ConsoleError::InputClosed)
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        (**self).write_line(line)
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        (**self).prompt(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("A1\n".to_string()), "A1");
        assert_eq!(strip_line_ending("A1\r\n".to_string()), "A1");
        assert_eq!(strip_line_ending("A1".to_string()), "A1");
        assert_eq!(strip_line_ending(" A1 \n".to_string()), " A1 ");
    }

    #[test]
    fn test_invalid_utf8_line_is_read_as_text() {
        let mut input = std::io::Cursor::new(b"\xff\xfe\nA1\n".to_vec());
        let board = tictactoe_engine::Board::empty(3);

        let garbled = read_input_line(&mut input).unwrap();
        assert_eq!(garbled, "\u{FFFD}\u{FFFD}");
        assert!(!tictactoe_engine::is_valid_move(&board, &garbled));

        let valid = read_input_line(&mut input).unwrap();
        assert_eq!(valid, "A1");
        assert!(tictactoe_engine::is_valid_move(&board, &valid));

        assert!(matches!(read_input_line(&mut input), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = std::io::Cursor::new(b"B2".to_vec());
        assert_eq!(read_input_line(&mut input).unwrap(), "B2");
    }

    #[test]
    fn test_memory_console_replays_and_records() {
        let mut console = MemoryConsole::new(["B2"]);
        console.write_line("hello").unwrap();
        assert_eq!(console.prompt("> ").unwrap(), "B2");
        assert_eq!(console.output(), ["hello".to_string(), "> ".to_string()]);
        assert!(matches!(console.prompt("> "), Err(ConsoleError::InputClosed)));
    }
}
