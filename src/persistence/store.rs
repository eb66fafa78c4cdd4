use super::codec::{parse_tasks, serialize_tasks};
use super::files::{atomic_write, read_file, store_file};
use crate::domain::Task;
use anyhow::{Context, Result};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Fixed key the task list is stored under
pub const STORAGE_KEY: &str = "tasks";

/// Synchronous key-value persistence for the serialized task list
pub trait TaskStore {
    /// Key this store reads and writes
    fn key(&self) -> &str;

    /// Last written value, or `None` if nothing was ever stored
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the stored value
    fn save(&mut self, serialized: &str) -> Result<()>;
}

/// Stores the task list as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    key: String,
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: &Path) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: &Path, key: &str) -> Self {
        Self {
            key: key.to_string(),
            path: store_file(dir, key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn key(&self) -> &str {
        &self.key
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<String>> {
        read_file(&self.path)
    }

    #[tracing::instrument(skip(self, serialized), fields(path = %self.path.display(), bytes = serialized.len()))]
    fn save(&mut self, serialized: &str) -> Result<()> {
        atomic_write(&self.path, serialized)?;
        debug!("saved task list");
        Ok(())
    }
}

/// In-process store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value already stored
    pub fn with_value(serialized: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(serialized.to_string());
        store
    }

    /// Number of saves performed so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Current stored value
    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TaskStore for MemoryStore {
    fn key(&self) -> &str {
        STORAGE_KEY
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(serialized.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Load the task list, falling back to an empty list when the stored value is
/// missing, unreadable or malformed
pub fn load_tasks(store: &dyn TaskStore) -> Vec<Task> {
    let content = match store.load() {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(key = store.key(), "no stored task list, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(key = store.key(), error = %format!("{:#}", e), "could not read stored task list, starting empty");
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match parse_tasks(&content) {
        Ok(tasks) => {
            debug!(key = store.key(), count = tasks.len(), "loaded task list");
            tasks
        }
        Err(e) => {
            warn!(key = store.key(), error = %e, "stored task list is invalid, starting empty");
            Vec::new()
        }
    }
}

/// Serialize and write the whole task list
pub fn save_tasks(store: &mut dyn TaskStore, tasks: &[Task]) -> Result<()> {
    let serialized = serialize_tasks(tasks).context("Failed to serialize task list")?;
    store
        .save(&serialized)
        .with_context(|| format!("Failed to save task list under key '{}'", store.key()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_tasks() -> Vec<Task> {
        let mut tasks: Vec<Task> = ["B", "A"].iter().filter_map(|t| Task::new(t)).collect();
        tasks[0].completed = true;
        tasks
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        let tasks = sample_tasks();

        save_tasks(&mut store, &tasks).unwrap();
        assert!(store.path().exists());

        let reopened = FileStore::new(temp_dir.path());
        assert_eq!(load_tasks(&reopened), tasks);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.load().unwrap().is_none());
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_file_store_malformed_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        std::fs::write(store.path(), "{ definitely not a task list").unwrap();

        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_file_store_empty_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        std::fs::write(store.path(), "  \n").unwrap();

        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_file_store_custom_key() {
        let temp_dir = tempdir().unwrap();
        let store = FileStore::with_key(temp_dir.path(), "work");
        assert_eq!(store.key(), "work");
        assert!(store.path().ends_with("work.json"));
    }

    #[test]
    fn test_memory_store_round_trip_and_writes() {
        let mut store = MemoryStore::new();
        let observer = store.clone();
        assert!(load_tasks(&store).is_empty());

        let tasks = sample_tasks();
        save_tasks(&mut store, &tasks).unwrap();

        assert_eq!(observer.writes(), 1);
        assert_eq!(load_tasks(&observer), tasks);
    }

    #[test]
    fn test_memory_store_with_invalid_value() {
        let store = MemoryStore::with_value("[1, 2, 3]");
        assert!(load_tasks(&store).is_empty());
        assert_eq!(store.writes(), 0);
    }
}
