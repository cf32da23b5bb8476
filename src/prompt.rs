use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crate::error::{ClyperError, Result};

/// Interactive console surface used by the entry operations.
pub trait Prompt {
    /// Prints `prompt` and blocks until a line is entered. The trailing newline is removed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn say(&mut self, message: &str);

    /// Yes/no question. Only `y` (any case, surrounding whitespace ignored) is a yes.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.read_line(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// Stdin/stdout prompt.
#[derive(Debug, Default)]
pub struct Console;

impl Prompt for Console {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ClyperError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Replays canned answers and records everything printed.
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    pub output: Vec<String>,
}

impl Scripted {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Prompt for Scripted {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.push(prompt.to_string());
        self.answers.pop_front().ok_or(ClyperError::InputClosed)
    }

    fn say(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_runs_dry() {
        let mut prompt = Scripted::new(["one"]);
        assert_eq!(prompt.read_line("? ").unwrap(), "one");
        assert!(matches!(
            prompt.read_line("? "),
            Err(ClyperError::InputClosed)
        ));
    }

    #[test]
    fn confirm_trims_and_ignores_case() {
        let mut prompt = Scripted::new([" y ", "Y", "n", "yy"]);
        assert!(prompt.confirm("").unwrap());
        assert!(prompt.confirm("").unwrap());
        assert!(!prompt.confirm("").unwrap());
        assert!(!prompt.confirm("").unwrap());
    }
}
