use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::task::ActorId;

const DEFAULT_FILE_NAME: &str = "store.json";
const GLOBAL_DIR_NAME: &str = ".todo";

/// The local account every mutation is attributed to unless configured.
pub const DEFAULT_ACTOR_ID: ActorId = 1;

pub const STORE_PATH_ENV: &str = "TODO_STORE_PATH";
pub const ACCOUNT_ID_ENV: &str = "TODO_ACCOUNT_ID";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub store_path: PathBuf,
    pub actor_id: ActorId,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_FILE_NAME),
            actor_id: DEFAULT_ACTOR_ID,
        }
    }
}

impl StoreConfig {
    pub fn new(store_path: impl Into<PathBuf>, actor_id: ActorId) -> Self {
        Self {
            store_path: store_path.into(),
            actor_id,
        }
    }

    /// `./store.json` in the working directory, overlaid with the
    /// `TODO_STORE_PATH` / `TODO_ACCOUNT_ID` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Store shared across directories: `~/.todo/store.json`.
    pub fn global() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            Error::InvalidArgument("Could not determine home directory".to_string())
        })?;
        Ok(Self {
            store_path: home_dir.join(GLOBAL_DIR_NAME).join(DEFAULT_FILE_NAME),
            ..Self::default()
        })
    }

    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }

    pub fn with_actor_id(mut self, actor_id: ActorId) -> Self {
        self.actor_id = actor_id;
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(STORE_PATH_ENV).filter(|p| !p.is_empty()) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ACCOUNT_ID_ENV) {
            config.actor_id = parse_actor_id(&raw)?;
        }
        Ok(config)
    }
}

pub fn parse_actor_id(raw: &str) -> Result<ActorId> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("Invalid account id: '{}'", raw)))
}
