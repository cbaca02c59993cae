//! Line-oriented prompting over any reader/writer pair
//!
//! Every prompt re-asks until it gets a usable answer. End of input surfaces
//! as [`WarError::InputClosed`] so the caller can wind the game down.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::core::error::{Result, WarError};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `text` and read one line, without its line ending
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WarError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt until `parse` accepts the line
    ///
    /// Recoverable errors are shown and the question is asked again; any
    /// other error ends the prompt.
    pub fn prompt_with<T>(
        &mut self,
        text: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let line = self.prompt(text)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Rejected input '{}': {}", line, e);
                    writeln!(self.output, "[!] {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt for a number, re-asking on anything that does not parse
    pub fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<T> {
        self.prompt_with(text, |line| {
            let text = line.trim();
            text.parse::<T>()
                .map_err(|_| WarError::InvalidInput(format!("'{}' is not a valid number", text)))
        })
    }
}
