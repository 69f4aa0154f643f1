pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use input::{expand_key, parse_status};
pub use model::task::{ActorId, Task, TaskChanges, TodoStatus};
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::todo_service::{Command, Outcome, TodoService};
pub use store::FileStore;
