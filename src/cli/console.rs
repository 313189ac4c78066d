use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::cli::errors::ConsoleError;

/// Line-oriented prompt and output over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `message` without a newline and reads one line back, minus its line ending.
    ///
    /// # Errors
    /// Returns `ConsoleError::Closed` once the input has no more lines.
    pub fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed)
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
