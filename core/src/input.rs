use crate::error::{Error, Result};
use crate::model::task::TodoStatus;

/// User-facing status tokens, in the same order as `TodoStatus::ALL`.
pub const STATUS_TOKENS: [&str; 3] = ["open", "inprogress", "done"];

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| !key.is_empty() && c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(Error::InvalidArgument(format!("Unknown key: '{}'", key))),
        _ => Err(Error::InvalidArgument(format!(
            "Ambiguous key: '{}' matches {:?}",
            key, matches
        ))),
    }
}

/// Maps what a user typed to a status. Accepts the short tokens
/// (`open`, `inprogress`, `done`, or any unique prefix, any case) and the
/// stored tokens themselves.
pub fn parse_status(input: &str) -> Result<TodoStatus> {
    let input = input.trim();
    if let Ok(status) = input.parse::<TodoStatus>() {
        return Ok(status);
    }
    let normalized: String = input
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_lowercase();
    let token = expand_key(&normalized, &STATUS_TOKENS).map_err(|_| {
        Error::InvalidArgument(format!(
            "Unknown status: '{}' (expected one of {})",
            input,
            STATUS_TOKENS.join(", ")
        ))
    })?;
    let pos = STATUS_TOKENS
        .iter()
        .position(|t| *t == token)
        .ok_or_else(|| Error::InvalidArgument(format!("Unknown status: '{}'", input)))?;
    Ok(TodoStatus::ALL[pos])
}
