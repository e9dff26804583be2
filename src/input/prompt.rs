//! Interactive prompts.
//!
//! Collects the base network and host counts line by line. Invalid counts
//! are reported and asked again; they never reach the allocator.

use crate::error::InputError;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Parse one host count, rejecting anything that is not an integer >= 1.
pub fn parse_host_count(input: &str) -> Result<u32, InputError> {
    let input = input.trim();
    let invalid = |reason: &str| InputError::InvalidHostCount {
        input: input.to_string(),
        reason: reason.to_string(),
    };
    let value: i64 = input.parse().map_err(|_| invalid("enter a whole number"))?;
    if value < 1 {
        return Err(invalid("must be at least 1"));
    }
    u32::try_from(value).map_err(|_| invalid("too large"))
}

/// Line based prompt loop over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writer the prompts go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::warn!("Input closed at prompt: {}", prompt.trim());
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt_base_network(&mut self) -> Result<String, InputError> {
        self.read_line("Enter the base network with prefix (e.g. 10.0.0.0/16): ")
    }

    /// Ask until a count >= 1 is entered.
    pub fn prompt_count(&mut self, prompt: &str) -> Result<u32, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_host_count(&line) {
                Ok(count) => return Ok(count),
                Err(e) => {
                    log::debug!("Rejected input: {e}");
                    writeln!(self.output, "{}", e.to_string().yellow())?;
                }
            }
        }
    }

    /// Ask for `count` host counts, in subnet order.
    pub fn prompt_host_counts(&mut self, count: u32) -> Result<Vec<u32>, InputError> {
        (1..=count)
            .map(|i| self.prompt_count(&format!("Hosts needed for subnet {i}: ")))
            .collect()
    }

    /// Raw filename answer, empty when the user just pressed Enter.
    pub fn prompt_filename(&mut self, default: &str) -> Result<String, InputError> {
        self.read_line(&format!("\nSpreadsheet filename (Enter for {default}): "))
    }
}
