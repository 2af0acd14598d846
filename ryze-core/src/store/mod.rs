//! Thought storage contract
//!
//! The analytics layer consumes thought records through the [`ThoughtStore`]
//! trait; how records are actually persisted (local file, database,
//! encrypted container) is an application-shell concern and lives behind
//! this seam. [`InMemoryThoughtStore`] is the reference implementation,
//! used directly in tests and as the backing cache in the shell.
//!
//! Every query returns an owned snapshot. Analytics functions require their
//! input collection to be frozen for the duration of one computation; owned
//! snapshots give callers that isolation without any locking inside the
//! core.

mod memory;

pub use memory::InMemoryThoughtStore;

use crate::error::Result;
use crate::types::Thought;

/// Read/write access to the thought journal.
///
/// Implementations backed by fallible media should map their failures to
/// [`Error::Store`](crate::Error::Store); the not-found cases are spelled
/// out per method.
pub trait ThoughtStore: Send + Sync {
    /// Add a new thought to the journal.
    fn insert(&mut self, thought: Thought) -> Result<()>;

    /// Fetch a thought by id.
    fn get(&self, id: &str) -> Result<Option<Thought>>;

    /// Replace a stored thought (e.g. after `resolve` or a deadline
    /// reschedule). Fails with `ThoughtNotFound` if the id is unknown.
    fn update(&mut self, thought: Thought) -> Result<()>;

    /// Remove a thought and its owned outcomes permanently. Fails with
    /// `ThoughtNotFound` if the id is unknown.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Snapshot of every thought, ordered by creation time.
    fn all_thoughts(&self) -> Result<Vec<Thought>>;

    /// Snapshot of resolved thoughts, ordered by creation time.
    fn resolved_thoughts(&self) -> Result<Vec<Thought>>;

    /// Snapshot of active (unresolved) thoughts, ordered by creation time.
    fn unresolved_thoughts(&self) -> Result<Vec<Thought>>;
}
