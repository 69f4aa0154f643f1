use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

/// Asks `message` on stdout and reads one line from stdin, without the
/// trailing newline.
pub fn ask(message: &str) -> Result<String> {
    let stdin = io::stdin();
    ask_with(&mut stdin.lock(), &mut io::stdout(), message)
}

/// Like [`ask`], but an empty answer becomes `None`.
pub fn ask_optional(message: &str) -> Result<Option<String>> {
    let answer = ask(message)?;
    Ok(if answer.trim().is_empty() { None } else { Some(answer) })
}

pub fn ask_with(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> Result<String> {
    write!(output, "? {} ", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed before an answer to '{}' was given", message);
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Uses the flag value when given, otherwise prompts.
pub fn value_or_ask(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => ask(message),
    }
}
