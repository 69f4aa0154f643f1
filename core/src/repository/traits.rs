use crate::error::{Error, Result};
use crate::model::task::{Task, TaskChanges, TodoStatus};

/// Operations over the task store. Every call is a full load/modify/save
/// round trip; nothing is cached between calls.
pub trait TaskRepository {
    fn list_all(&self) -> Result<Vec<Task>>;
    /// Appends a new open task and returns its id.
    fn create(&self, title: &str, description: &str) -> Result<String>;
    fn update(&self, id: &str, changes: TaskChanges) -> Result<String>;
    /// Returns the number of removed tasks: 1, or 0 when `id` is unknown.
    fn remove(&self, id: &str) -> Result<usize>;

    fn list_by_status(&self, status: &str) -> Result<Vec<Task>> {
        let status: TodoStatus = status.parse()?;
        let mut tasks = self.list_all()?;
        tasks.retain(|t| t.status == status);
        Ok(tasks)
    }

    fn get(&self, id: &str) -> Result<Task> {
        self.list_all()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Expands a unique id prefix to the full id. An exact match always wins.
    fn resolve_id(&self, prefix: &str) -> Result<String> {
        let tasks = self.list_all()?;
        if tasks.iter().any(|t| t.id == prefix) {
            return Ok(prefix.to_string());
        }
        if prefix.is_empty() {
            return Err(Error::InvalidArgument("Empty id".to_string()));
        }
        let matches: Vec<&str> = tasks
            .iter()
            .filter(|t| t.id.starts_with(prefix))
            .map(|t| t.id.as_str())
            .collect();
        match matches.len() {
            1 => Ok(matches[0].to_string()),
            0 => Err(Error::NotFound(prefix.to_string())),
            _ => Err(Error::InvalidArgument(format!(
                "Ambiguous id: '{}' matches {:?}",
                prefix, matches
            ))),
        }
    }

    fn set_status(&self, id: &str, status: &str) -> Result<String> {
        let status: TodoStatus = status.parse()?;
        self.update(id, TaskChanges::new().status(status))
    }

    fn set_liked(&self, id: &str, liked: bool) -> Result<String> {
        self.update(id, TaskChanges::new().liked(liked))
    }

    fn set_comment(&self, id: &str, comment: &str) -> Result<String> {
        self.update(id, TaskChanges::new().comment(comment))
    }
}
