use crate::io::storage::KeyValueStore;
use crate::model::filter::Filter;
use crate::model::task::Task;
use crate::ops::task_store::TaskStore;

/// The subsequence of `tasks` selected by `filter`, order preserved
pub fn project(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t.completed)).collect()
}

/// Aggregate counts over the whole list, independent of the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
}

impl Counts {
    pub fn of(tasks: &[Task]) -> Counts {
        Counts {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

/// Sentence shown when the filtered list is empty
pub fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "You don't have any tasks yet.",
        Filter::Completed => "You don't have any completed tasks yet.",
        Filter::Pending => "You don't have any pending tasks right now.",
    }
}

/// Active filter plus a memo of the last projection.
///
/// The cache is keyed by `(store version, list length, filter)` and holds
/// indices into the store's list; it is only an optimization, results always
/// equal [`project`] over the current list. A projector is meant to follow one
/// store; handing it another store whose key happens to match yields a stale
/// projection, never a panic.
#[derive(Debug, Clone, Default)]
pub struct ViewProjector {
    filter: Filter,
    cache: Option<Projection>,
}

#[derive(Debug, Clone)]
struct Projection {
    version: u64,
    len: usize,
    filter: Filter,
    indices: Vec<usize>,
    counts: Counts,
}

impl ViewProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks visible under the active filter
    pub fn filtered<'a, S: KeyValueStore>(&mut self, store: &'a TaskStore<S>) -> Vec<&'a Task> {
        let tasks = store.tasks();
        self.refresh(store)
            .indices
            .iter()
            .filter_map(|&i| tasks.get(i))
            .collect()
    }

    pub fn counts<S: KeyValueStore>(&mut self, store: &TaskStore<S>) -> Counts {
        self.refresh(store).counts
    }

    /// Whether the next `filtered`/`counts` call can reuse the memo
    pub fn is_fresh<S: KeyValueStore>(&self, store: &TaskStore<S>) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|p| {
                p.version == store.version()
                    && p.len == store.tasks().len()
                    && p.filter == self.filter
            })
    }

    fn refresh<S: KeyValueStore>(&mut self, store: &TaskStore<S>) -> &Projection {
        if !self.is_fresh(store) {
            self.cache = None;
        }
        let filter = self.filter;
        self.cache.get_or_insert_with(|| {
            let tasks = store.tasks();
            Projection {
                version: store.version(),
                len: tasks.len(),
                filter,
                indices: tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| filter.matches(t.completed))
                    .map(|(i, _)| i)
                    .collect(),
                counts: Counts::of(tasks),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::{MemoryStore, Storage};
    use crate::model::task::TaskId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn task(id: u64, text: &str, completed: bool) -> Task {
        let mut t = Task::new(TaskId(id), text.into(), Utc.timestamp_opt(0, 0).unwrap());
        t.completed = completed;
        t
    }

    fn sample() -> Vec<Task> {
        vec![
            task(4, "D", true),
            task(3, "C", false),
            task(2, "B", true),
            task(1, "A", false),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id.0).collect()
    }

    fn store() -> TaskStore<MemoryStore> {
        TaskStore::open_with_clock(
            Storage::new(MemoryStore::new()),
            Box::new(|| Utc.timestamp_millis_opt(1_000).unwrap()),
        )
    }

    #[test]
    fn all_is_identity() {
        let tasks = sample();
        assert_eq!(ids(&project(&tasks, Filter::All)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn completed_and_pending_preserve_order() {
        let tasks = sample();
        assert_eq!(ids(&project(&tasks, Filter::Completed)), vec![4, 2]);
        assert_eq!(ids(&project(&tasks, Filter::Pending)), vec![3, 1]);
    }

    #[test]
    fn projections_partition_the_list() {
        let tasks = sample();
        let done = project(&tasks, Filter::Completed).len();
        let pending = project(&tasks, Filter::Pending).len();
        assert_eq!(done + pending, tasks.len());
    }

    #[test]
    fn counts_ignore_filter() {
        let counts = Counts::of(&sample());
        assert_eq!(counts, Counts { total: 4, completed: 2 });
        assert_eq!(counts.pending(), 2);
        assert_eq!(Counts::of(&[]), Counts::default());
    }

    #[test]
    fn empty_messages_per_filter() {
        assert_eq!(empty_message(Filter::All), "You don't have any tasks yet.");
        assert_eq!(
            empty_message(Filter::Completed),
            "You don't have any completed tasks yet."
        );
        assert_eq!(
            empty_message(Filter::Pending),
            "You don't have any pending tasks right now."
        );
    }

    #[test]
    fn buy_milk_scenario() {
        let mut store = store();
        let mut view = ViewProjector::new();

        let id = store.add_task("Buy milk").unwrap();
        assert_eq!(view.counts(&store), Counts { total: 1, completed: 0 });
        let filtered = view.filtered(&store);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "Buy milk");
        assert!(!filtered[0].completed);

        store.toggle_task(id);
        assert_eq!(view.counts(&store).completed, 1);
        view.set_filter(Filter::Pending);
        assert!(view.filtered(&store).is_empty());
    }

    #[test]
    fn cache_tracks_mutations_and_filter_changes() {
        let mut store = store();
        let mut view = ViewProjector::new();
        assert!(!view.is_fresh(&store));

        let a = store.add_task("A").unwrap();
        store.add_task("B");
        assert_eq!(view.filtered(&store).len(), 2);
        assert!(view.is_fresh(&store));

        store.toggle_task(a);
        assert!(!view.is_fresh(&store));
        view.set_filter(Filter::Completed);
        let filtered = view.filtered(&store);
        assert_eq!(ids(&filtered), ids(&project(store.tasks(), Filter::Completed)));

        view.set_filter(Filter::Pending);
        assert!(!view.is_fresh(&store));
        let filtered = view.filtered(&store);
        assert_eq!(ids(&filtered), ids(&project(store.tasks(), Filter::Pending)));
    }

    #[test]
    fn switching_stores_at_same_version_does_not_panic() {
        let mut big = store();
        big.add_task("A");
        big.add_task("B");
        big.add_task("C");
        let mut small = store();
        small.add_task("X");
        // Bring both to the same version
        let x = small.tasks()[0].id;
        small.toggle_task(x);
        small.toggle_task(x);
        assert_eq!(big.version(), small.version());

        let mut view = ViewProjector::new();
        assert_eq!(view.filtered(&big).len(), 3);
        assert!(!view.is_fresh(&small));
        let filtered = view.filtered(&small);
        assert_eq!(ids(&filtered), ids(&project(small.tasks(), Filter::All)));
    }

    #[test]
    fn filter_defaults_to_all() {
        assert_eq!(ViewProjector::new().filter(), Filter::All);
    }
}
