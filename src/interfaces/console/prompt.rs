use crate::error::Result;
use std::io::{BufRead, Write};

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Input {
    Number(i64),
    /// A line that is not a whole number; holds the trimmed text.
    Invalid(String),
    EndOfInput,
}

/// Line-oriented console over any buffered reader and writer.
///
/// Prompts are written without a trailing newline and flushed before the
/// blocking read, so the cursor sits after the label as in a terminal.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for everything that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `label`, then reads and classifies one line.
    pub fn prompt_number(&mut self, label: &str) -> Result<Input> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::EndOfInput);
        }
        let trimmed = line.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(value) => Input::Number(value),
            Err(_) => Input::Invalid(trimmed.to_string()),
        })
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
