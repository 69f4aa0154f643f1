use tracing::debug;

use crate::error::{Error, Result};
use crate::input::parse_status;
use crate::model::task::{Task, TaskChanges};
use crate::repository::TaskRepository;

/// Input already collected from the user, independent of how it was obtained.
/// Ids may be given as a unique prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create { title: String, description: String },
    Update { id: String, changes: TaskChanges },
    Remove { id: String },
    List { status: Option<String> },
    Show { id: String },
    Like { id: String, liked: bool },
    Comment { id: String, comment: String },
    SetStatus { id: String, status: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Id(String),
    Removed(usize),
    Task(Task),
    Tasks(Vec<Task>),
}

pub struct TodoService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn execute(&self, command: Command) -> Result<Outcome> {
        debug!(?command, "executing");
        match command {
            Command::Create { title, description } => {
                self.repo.create(&title, &description).map(Outcome::Id)
            }
            Command::Update { id, changes } => {
                changes.validate()?;
                let id = self.repo.resolve_id(&id)?;
                self.repo.update(&id, changes).map(Outcome::Id)
            }
            Command::Remove { id } => match self.repo.resolve_id(&id) {
                Ok(id) => self.repo.remove(&id).map(Outcome::Removed),
                Err(Error::NotFound(_)) => Ok(Outcome::Removed(0)),
                Err(e) => Err(e),
            },
            Command::List { status: None } => self.repo.list_all().map(Outcome::Tasks),
            Command::List { status: Some(raw) } => {
                let status = parse_status(&raw)?;
                self.repo.list_by_status(status.as_str()).map(Outcome::Tasks)
            }
            Command::Show { id } => {
                let id = self.repo.resolve_id(&id)?;
                self.repo.get(&id).map(Outcome::Task)
            }
            Command::Like { id, liked } => {
                let id = self.repo.resolve_id(&id)?;
                self.repo.set_liked(&id, liked).map(Outcome::Id)
            }
            Command::Comment { id, comment } => {
                let id = self.repo.resolve_id(&id)?;
                self.repo.set_comment(&id, &comment).map(Outcome::Id)
            }
            Command::SetStatus { id, status } => {
                let status = parse_status(&status)?;
                let id = self.repo.resolve_id(&id)?;
                self.repo.set_status(&id, status.as_str()).map(Outcome::Id)
            }
        }
    }
}
