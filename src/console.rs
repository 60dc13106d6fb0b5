use crate::error::{ExplorerError, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Width of the `----` separator printed between sections.
pub const SEPARATOR_WIDTH: usize = 40;

/// Line-oriented question/answer I/O.
///
/// Generic over the streams so a session can run against stdin/stdout or
/// in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn separator(&mut self) -> Result<()> {
        self.say("-".repeat(SEPARATOR_WIDTH))
    }

    /// Print `question` and read one answer, trimmed and lowercased.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so such an answer is simply
    /// rejected by the caller's parser.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "\n{}", question)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ExplorerError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_lowercase())
    }

    /// Ask until `parse` accepts the answer, printing `retry_message` after
    /// each rejected one.
    pub fn ask_until<T, F>(&mut self, question: &str, retry_message: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => {
                    log::debug!("rejected answer {:?}", answer);
                    self.say(format!("\n{}", retry_message))?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
