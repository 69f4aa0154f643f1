use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Identifier of the account that performed a mutation.
pub type ActorId = u64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoStatus {
    #[serde(rename = "TODO_STATUS_OPEN")]
    Open,
    #[serde(rename = "TODO_STATUS_IN_PROGRESS")]
    InProgress,
    #[serde(rename = "TODO_STATUS_DONE")]
    Done,
}

impl Default for TodoStatus {
    fn default() -> Self {
        TodoStatus::Open
    }
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Open, TodoStatus::InProgress, TodoStatus::Done];

    /// The token written to the store file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Open => "TODO_STATUS_OPEN",
            TodoStatus::InProgress => "TODO_STATUS_IN_PROGRESS",
            TodoStatus::Done => "TODO_STATUS_DONE",
        }
    }

    fn bare_name(&self) -> &'static str {
        match self {
            TodoStatus::Open => "OPEN",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Done => "DONE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Open => "open",
            TodoStatus::InProgress => "in progress",
            TodoStatus::Done => "done",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Case-sensitive: only the persisted tokens and their bare names are accepted.
impl FromStr for TodoStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s || status.bare_name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("Unknown status: '{}'", s)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: TodoStatus,
    #[serde(default)]
    pub is_liked: bool,

    pub created_date: DateTime<Utc>,
    pub created_by_user_id: ActorId,
    pub last_update_date: DateTime<Utc>,
    pub last_update_by_user_id: ActorId,
}

impl Task {
    pub fn new(title: String, description: String, actor: ActorId) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            title,
            description,
            comment: None,
            status: TodoStatus::default(),
            is_liked: false,
            created_date: now,
            created_by_user_id: actor,
            last_update_date: now,
            last_update_by_user_id: actor,
        }
    }

    /// Overwrites every field present in `changes`. Identity and creation
    /// metadata are never touched.
    pub fn apply(&mut self, changes: TaskChanges, actor: ActorId) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(comment) = changes.comment {
            self.comment = Some(comment);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(is_liked) = changes.is_liked {
            self.is_liked = is_liked;
        }
        self.last_update_date = Utc::now();
        self.last_update_by_user_id = actor;
    }
}

/// Random v4 UUID; collisions are negligible for any realistic store.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shallow change set for `update`. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub status: Option<TodoStatus>,
    pub is_liked: Option<bool>,
}

impl TaskChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn liked(mut self, is_liked: bool) -> Self {
        self.is_liked = Some(is_liked);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.comment.is_none()
            && self.status.is_none()
            && self.is_liked.is_none()
    }

    /// Rejects payloads that would leave the record unchanged or without a title.
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::InvalidArgument("No fields to update".to_string()));
        }
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err(Error::InvalidArgument("Title must not be empty".to_string()));
        }
        Ok(())
    }
}
