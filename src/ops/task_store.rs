use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::io::storage::{KeyValueStore, Storage};
use crate::model::task::{Task, TaskId, normalize_text};
use crate::model::theme::Theme;

/// Storage key for the task list
pub const TASKS_KEY: &str = "todo_tasks_v1";
/// Storage key for the theme preference
pub const THEME_KEY: &str = "todo_theme_v1";

/// Source of "now" for creation timestamps and ids
pub type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// Hands out strictly increasing, time-like ids.
///
/// Each id is `max(previous + 1, now in epoch millis)`: close to the
/// creation time, but never repeated when the clock stalls or goes back.
#[derive(Debug, Clone, Copy)]
struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    fn seeded(tasks: &[Task]) -> Self {
        IdAllocator {
            last: tasks.iter().map(|t| t.id.0).max().unwrap_or(0),
        }
    }

    /// `None` once the id space above the largest id in use is exhausted
    fn next(&mut self, now: DateTime<Utc>) -> Option<TaskId> {
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = now_ms.max(self.last.checked_add(1)?);
        self.last = id;
        Some(TaskId(id))
    }
}

/// Owner of the task list and theme preference.
///
/// Every mutation goes through this type and is persisted right after the
/// in-memory update; no-op calls write nothing.
pub struct TaskStore<S: KeyValueStore> {
    storage: Storage<S>,
    /// Newest first
    tasks: Vec<Task>,
    theme: Theme,
    /// Bumped on every task-list change
    version: u64,
    ids: IdAllocator,
    clock: Clock,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load tasks and theme from `storage`, defaulting whatever is missing
    /// or unreadable.
    pub fn open(storage: Storage<S>) -> Self {
        Self::open_with_clock(storage, Box::new(Utc::now))
    }

    pub fn open_with_clock(storage: Storage<S>, clock: Clock) -> Self {
        let tasks = sanitize(storage.load(TASKS_KEY, Vec::new()));
        let theme = load_theme(&storage);
        debug!(tasks = tasks.len(), theme = theme.as_str(), "store opened");
        TaskStore {
            ids: IdAllocator::seeded(&tasks),
            storage,
            tasks,
            theme,
            version: 0,
            clock,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Changes whenever the task list changes
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage<S> {
        &mut self.storage
    }

    /// Prepend a new pending task. Blank text is ignored.
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = normalize_text(raw_text)?;
        let now = (self.clock)();
        let Some(id) = self.ids.next(now) else {
            warn!(last = self.ids.last, "no task ids left; task not added");
            return None;
        };
        self.tasks.insert(0, Task::new(id, text, now));
        debug!(%id, "task added");
        self.persist_tasks();
        Some(id)
    }

    /// Flip a task's completed flag. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "task toggled");
        self.persist_tasks();
        true
    }

    /// Remove a task. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(idx);
        debug!(%id, "task deleted");
        self.persist_tasks();
        true
    }

    /// Replace a task's text. Blank text and unknown ids are ignored.
    pub fn edit_task(&mut self, id: TaskId, raw_text: &str) -> bool {
        let Some(text) = normalize_text(raw_text) else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = text;
        debug!(%id, "task edited");
        self.persist_tasks();
        true
    }

    /// Switch between light and dark; persists the theme only.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.as_str(), "theme toggled");
        self.storage.save(THEME_KEY, &self.theme);
        self.theme
    }

    fn persist_tasks(&mut self) {
        self.version += 1;
        self.storage.save(TASKS_KEY, &self.tasks);
    }
}

/// Repair a loaded list so it satisfies the list invariants: every entry
/// decodes as a task, text is trimmed and non-blank, and ids are unique
/// (first occurrence wins). Bad entries are dropped one by one.
fn sanitize(loaded: Vec<serde_json::Value>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(loaded.len());
    for (index, entry) in loaded.into_iter().enumerate() {
        let mut task: Task = match serde_json::from_value(entry) {
            Ok(task) => task,
            Err(e) => {
                warn!(index, error = %e, "dropping stored task that does not decode");
                continue;
            }
        };
        let Some(text) = normalize_text(&task.text) else {
            warn!(id = %task.id, "dropping stored task with blank text");
            continue;
        };
        if !seen.insert(task.id) {
            warn!(id = %task.id, "dropping stored task with duplicate id");
            continue;
        }
        task.text = text;
        tasks.push(task);
    }
    tasks
}

/// Stored theme, accepting both the JSON string form and a bare word.
fn load_theme<S: KeyValueStore>(storage: &Storage<S>) -> Theme {
    let Some(raw) = storage.load_raw(THEME_KEY) else {
        return Theme::default();
    };
    let value = serde_json::from_str::<String>(&raw).unwrap_or_else(|_| raw.trim().to_string());
    Theme::parse(&value).unwrap_or_else(|| {
        warn!(value = %value, "unknown stored theme; using light");
        Theme::default()
    })
}
