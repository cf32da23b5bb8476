//! Character policy for keys, texts and infos.
//!
//! Backticks and both kinds of quotes break shell usage of stored snippets, so
//! they are stripped. Keys additionally lose all whitespace so they stay a single
//! token on the command line.

use crate::{error::Result, prompt::Prompt};

pub const UNWANTED: [char; 3] = ['`', '"', '\''];

fn is_unwanted(c: char) -> bool {
    UNWANTED.contains(&c)
}

pub fn has_unwanted(text: &str) -> bool {
    text.chars().any(is_unwanted)
}

/// True when `strip_key` would change the key, or the key is empty.
pub fn has_unwanted_key(key: &str) -> bool {
    key.is_empty() || key.chars().any(|c| is_unwanted(c) || c.is_whitespace())
}

pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| !is_unwanted(c)).collect()
}

pub fn strip_key(key: &str) -> String {
    key.chars()
        .filter(|&c| !is_unwanted(c) && !c.is_whitespace())
        .collect()
}

/// Shows both versions and asks whether to continue with the cleaned one.
pub fn confirm(prompt: &mut dyn Prompt, original: &str, cleaned: &str) -> Result<bool> {
    prompt.say("WARNING!");
    prompt.say("Detected unwanted character(s) in your input which could cause errors.");
    prompt.say(&format!(
        "Changed your input from:\n  {original}\nto:\n  {cleaned}"
    ));
    prompt.confirm("Press 'y' to continue with cleaned input or 'n' to cancel: ")
}
