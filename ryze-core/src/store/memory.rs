//! In-memory thought store
//!
//! Reference [`ThoughtStore`] implementation over a `HashMap`. Snapshots
//! are sorted by `created_at` (id as tie-break) so analytics output is
//! deterministic regardless of insertion order.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::Thought;

use super::ThoughtStore;

/// Thought store holding all records in memory.
#[derive(Debug, Default)]
pub struct InMemoryThoughtStore {
    thoughts: HashMap<String, Thought>,
}

impl InMemoryThoughtStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored thoughts.
    pub fn len(&self) -> usize {
        self.thoughts.len()
    }

    /// True if the store holds no thoughts.
    pub fn is_empty(&self) -> bool {
        self.thoughts.is_empty()
    }

    fn snapshot<F>(&self, predicate: F) -> Vec<Thought>
    where
        F: Fn(&Thought) -> bool,
    {
        let mut thoughts: Vec<Thought> = self
            .thoughts
            .values()
            .filter(|t| predicate(t))
            .cloned()
            .collect();
        thoughts.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        thoughts
    }
}

impl ThoughtStore for InMemoryThoughtStore {
    fn insert(&mut self, thought: Thought) -> Result<()> {
        tracing::debug!(thought_id = %thought.id, "Inserting thought");
        self.thoughts.insert(thought.id.clone(), thought);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Thought>> {
        Ok(self.thoughts.get(id).cloned())
    }

    fn update(&mut self, thought: Thought) -> Result<()> {
        if !self.thoughts.contains_key(&thought.id) {
            return Err(Error::ThoughtNotFound(thought.id));
        }
        tracing::debug!(thought_id = %thought.id, "Updating thought");
        self.thoughts.insert(thought.id.clone(), thought);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if self.thoughts.remove(id).is_none() {
            return Err(Error::ThoughtNotFound(id.to_string()));
        }
        tracing::debug!(thought_id = %id, "Deleted thought");
        Ok(())
    }

    fn all_thoughts(&self) -> Result<Vec<Thought>> {
        Ok(self.snapshot(|_| true))
    }

    fn resolved_thoughts(&self) -> Result<Vec<Thought>> {
        Ok(self.snapshot(|t| t.is_resolved))
    }

    fn unresolved_thoughts(&self) -> Result<Vec<Thought>> {
        Ok(self.snapshot(|t| !t.is_resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutcomeType;
    use chrono::Utc;

    fn make_thought(question: &str) -> Thought {
        Thought::new(question, Some(OutcomeType::Okay), None)
    }

    #[test]
    fn test_insert_get_delete() {
        let mut store = InMemoryThoughtStore::new();
        let thought = make_thought("Will the demo crash?");
        let id = thought.id.clone();

        store.insert(thought).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).unwrap().is_some());

        store.delete(&id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(&id),
            Err(Error::ThoughtNotFound(_))
        ));
    }

    #[test]
    fn test_update_requires_existing_id() {
        let mut store = InMemoryThoughtStore::new();
        let thought = make_thought("Orphan record");
        assert!(matches!(
            store.update(thought),
            Err(Error::ThoughtNotFound(_))
        ));
    }

    #[test]
    fn test_resolved_unresolved_split() {
        let mut store = InMemoryThoughtStore::new();

        let active = make_thought("Pending review");
        let mut resolved = make_thought("Past worry");
        resolved.resolve(OutcomeType::Good, Utc::now()).unwrap();

        store.insert(active).unwrap();
        store.insert(resolved).unwrap();

        assert_eq!(store.all_thoughts().unwrap().len(), 2);
        assert_eq!(store.resolved_thoughts().unwrap().len(), 1);
        assert_eq!(store.unresolved_thoughts().unwrap().len(), 1);
    }

    #[test]
    fn test_snapshots_sorted_by_creation() {
        let mut store = InMemoryThoughtStore::new();

        let mut older = make_thought("Older");
        older.created_at = Utc::now() - chrono::Duration::days(3);
        let newer = make_thought("Newer");

        // Insert newest first; snapshot order must not depend on it.
        store.insert(newer).unwrap();
        store.insert(older).unwrap();

        let all = store.all_thoughts().unwrap();
        assert_eq!(all[0].question, "Older");
        assert_eq!(all[1].question, "Newer");
    }
}
