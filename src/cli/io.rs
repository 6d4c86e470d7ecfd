//! Terminal I/O for the CLI
//!
//! Prompts block on a single line of input. There is no timeout; end of
//! input while a prompt waits is reported as `CliError::input_closed`.
//!
//! The session reads and writes only through [`Console`], so the whole
//! interactive flow runs in tests against in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::observability::{log_event, Event};

use super::errors::{CliError, CliResult};

/// Line-oriented input plus an output sink.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink for regular (non-prompt) output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line, without the line terminator.
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log_event(Event::InputClosed);
            return Err(CliError::input_closed());
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Yes/no question; only `s` (any case, surrounding blanks ignored) is yes.
    pub fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("s"))
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_newline() {
        let mut c = console("intitle\r\nrest\n");
        assert_eq!(c.ask("Op: ").unwrap(), "intitle");
        assert_eq!(c.ask("Next: ").unwrap(), "rest");

        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "Op: Next: ");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut c = console("abc");
        assert_eq!(c.ask("> ").unwrap(), "abc");
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut c = console("");
        let err = c.ask("> ").unwrap_err();
        assert_eq!(err.code_str(), "DORK_CLI_INPUT_CLOSED");
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut c = console("\n");
        assert_eq!(c.ask("> ").unwrap(), "");
    }

    #[test]
    fn test_confirm() {
        assert!(console("s\n").confirm("?").unwrap());
        assert!(console(" S \n").confirm("?").unwrap());
        assert!(!console("n\n").confirm("?").unwrap());
        assert!(!console("sim\n").confirm("?").unwrap());
    }
}
