//! File-backed todo store.
//!
//! All reads and writes of the backing JSON file go through this type.
//! Every mutation is a whole-file read-modify-write: the current
//! collection is loaded, one change applied, and the entire file
//! rewritten. Mutations serialize through an internal lock so two
//! concurrent writers cannot lose each other's changes.

use crate::error::{Result, StoreError};
use crate::types::{now_iso8601, validate_title, Todo, TodoDraft, TodoId, TodoPatch};
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Path to the backing JSON file.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/todos.json"),
        }
    }
}

/// The file-backed record store.
///
/// An absent backing file is legal initial state and reads as an empty
/// collection; the file and its parent directory are created on the
/// first mutation.
pub struct FileStore {
    /// Path to the backing file.
    path: PathBuf,

    /// Lock for write operations to keep read-modify-write atomic.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over the configured backing file.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            path: config.path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store over the given backing file path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self::new(StoreConfig {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // --- Read Operations ---

    /// All todos, in persisted order.
    pub fn list(&self) -> Vec<Todo> {
        self.load()
    }

    /// Find a todo by id.
    pub fn find(&self, id: TodoId) -> Result<Todo> {
        self.load()
            .into_iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    // --- Mutations ---

    /// Validate and persist a new todo.
    ///
    /// Assigns the next free id and the creation timestamp. Nothing is
    /// written when validation fails; a write failure surfaces as an
    /// error and the todo is not considered created.
    pub fn create(&self, draft: TodoDraft) -> Result<Todo> {
        let _lock = self.write_lock.lock();

        let errors = validate_title(draft.title.as_deref());
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let mut todos = self.load();
        let todo = Todo {
            id: next_id(&todos),
            title: draft.title.unwrap_or_default(),
            completed: draft.completed.unwrap_or(false),
            created_at: now_iso8601(),
        };
        todos.push(todo.clone());
        self.save(&todos)?;

        Ok(todo)
    }

    /// Merge the patch onto an existing todo and persist the result.
    ///
    /// Unset patch fields keep their current values; `created_at` is
    /// never touched. Nothing is written when the merged record fails
    /// validation.
    pub fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let _lock = self.write_lock.lock();

        let mut todos = self.load();
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut todo = todos[index].clone();
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }

        let errors = validate_title(Some(&todo.title));
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        todos[index] = todo.clone();
        self.save(&todos)?;

        Ok(todo)
    }

    /// Remove a todo and persist the remaining collection.
    pub fn delete(&self, id: TodoId) -> Result<()> {
        let _lock = self.write_lock.lock();

        let mut todos = self.load();
        let len_before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == len_before {
            return Err(StoreError::NotFound(id));
        }
        self.save(&todos)?;

        Ok(())
    }

    // --- Persistence ---

    /// Read and parse the backing file.
    ///
    /// Missing or malformed content yields an empty collection; read
    /// failures are logged, never raised.
    fn load(&self) -> Vec<Todo> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read data file"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(todos) => todos,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed data file, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Serialize the whole collection and rewrite the backing file.
    fn save(&self, todos: &[Todo]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, json).map_err(|err| {
            tracing::error!(
                path = %self.path.display(),
                error = %err,
                "failed to write data file"
            );
            err
        })?;

        Ok(())
    }
}

/// Next free id: one past the highest id on disk, 1 when empty.
fn next_id(todos: &[Todo]) -> TodoId {
    todos
        .iter()
        .map(|todo| todo.id)
        .max()
        .map_or(TodoId(1), TodoId::next)
}
