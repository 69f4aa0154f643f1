//! Encoding of the `{ "todos": [...] }` store document.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::task::Task;

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    todos: &'a [Task],
}

#[derive(Deserialize)]
struct StoreDocument {
    // `{}` and `{"todos": null}` both describe an empty store.
    #[serde(default)]
    todos: Option<Vec<Task>>,
}

/// Parses the store document. Empty (or whitespace-only) input is an empty
/// store; anything else that is not a well-formed document is `CorruptStore`.
pub fn decode(bytes: &[u8]) -> Result<Vec<Task>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(Error::CorruptStore)?;
    if !value.is_object() {
        return Err(Error::CorruptStore(serde_json::Error::custom(
            "expected a JSON object at the top level",
        )));
    }
    let document: StoreDocument = serde_json::from_value(value).map_err(Error::CorruptStore)?;
    Ok(document.todos.unwrap_or_default())
}

pub fn encode(tasks: &[Task]) -> Result<Vec<u8>> {
    let mut bytes =
        serde_json::to_vec_pretty(&StoreDocumentRef { todos: tasks }).map_err(Error::Encode)?;
    bytes.push(b'\n');
    Ok(bytes)
}
