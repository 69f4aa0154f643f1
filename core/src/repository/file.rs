use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::model::task::{ActorId, Task, TaskChanges};
use crate::repository::traits::TaskRepository;
use crate::store::{self, FileStore};

#[derive(Debug, Clone)]
pub struct FileTaskRepository {
    store: FileStore,
    actor_id: ActorId,
}

impl FileTaskRepository {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            store: FileStore::new(config.store_path),
            actor_id: config.actor_id,
        }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    fn read_tasks(&self) -> Result<Vec<Task>> {
        let tasks = store::decode(&self.store.read_all()?)?;
        debug!(count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.store.write_all(&store::encode(tasks)?)
    }
}

impl TaskRepository for FileTaskRepository {
    fn list_all(&self) -> Result<Vec<Task>> {
        self.read_tasks()
    }

    fn create(&self, title: &str, description: &str) -> Result<String> {
        if title.trim().is_empty() {
            return Err(Error::InvalidArgument("Title is required".to_string()));
        }
        let mut tasks = self.read_tasks()?;
        let task = Task::new(title.to_string(), description.to_string(), self.actor_id);
        let id = task.id.clone();
        tasks.push(task);
        self.write_tasks(&tasks)?;
        info!(%id, "created task");
        Ok(id)
    }

    fn update(&self, id: &str, changes: TaskChanges) -> Result<String> {
        changes.validate()?;
        let mut tasks = self.read_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        task.apply(changes, self.actor_id);
        self.write_tasks(&tasks)?;
        info!(%id, "updated task");
        Ok(id.to_string())
    }

    fn remove(&self, id: &str) -> Result<usize> {
        let mut tasks = self.read_tasks()?;
        let Some(pos) = tasks.iter().position(|t| t.id == id) else {
            warn!(%id, "nothing to remove");
            return Ok(0);
        };
        tasks.remove(pos);
        self.write_tasks(&tasks)?;
        info!(%id, "removed task");
        Ok(1)
    }
}
