//! Root-aware optimistic locking primitives.
//!
//! Aggregate roots carry a [`Version`] counter checked on every save.
//! Child entities do not get their own counters; instead each child
//! create, update or removal is recorded as a [`ChildFlush`] naming the
//! owning root at mutation time. At save, one forced root increment
//! covers all recorded child mutations, so two writers touching
//! different children of the same root still conflict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Optimistic-lock version counter for an aggregate root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// The version of a newly created, never-saved aggregate.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the next version.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw counter value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Child entity types expose the id of their owning root, if still attached.
///
/// A child detached during removal reports `None`, which is exactly what
/// keeps removal-only saves from forcing a root increment.
pub trait RootAware {
    /// Id type of the owning aggregate root.
    type RootId;

    /// Returns the owning root's id, or `None` once detached.
    fn root_id(&self) -> Option<Self::RootId>;
}

/// The kind of child mutation a flush records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildMutation {
    Created,
    Updated,
    Removed,
}

/// One recorded child mutation awaiting the next save.
///
/// The owning root's id is captured at mutation time, not at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildFlush<RootId> {
    /// What happened to the child.
    pub mutation: ChildMutation,

    /// The root the child referenced when the mutation was recorded.
    pub root: Option<RootId>,
}

impl<RootId> ChildFlush<RootId> {
    /// Records a mutation against a child, capturing its current root.
    pub fn new<C>(mutation: ChildMutation, child: &C) -> Self
    where
        C: RootAware<RootId = RootId>,
    {
        Self {
            mutation,
            root: child.root_id(),
        }
    }

    /// True when this flush still names the given root.
    pub fn forces_increment_of(&self, root_id: &RootId) -> bool
    where
        RootId: PartialEq,
    {
        self.root.as_ref() == Some(root_id)
    }
}

/// Aggregate roots addressed by a single version counter.
pub trait AggregateRoot {
    /// Id type of this root.
    type Id: Copy + PartialEq;

    /// Returns the root's id.
    fn id(&self) -> Self::Id;

    /// Returns the current version.
    fn version(&self) -> Version;

    /// Advances the version by one. Repositories call this; domain code
    /// never bumps its own version.
    fn force_version_increment(&mut self);

    /// Removes and returns all child flushes recorded since the last save.
    fn drain_child_flushes(&mut self) -> Vec<ChildFlush<Self::Id>>;
}

/// Drains the root's recorded child flushes and applies at most one forced
/// version increment if any flush still names the root.
///
/// Returns true when the version was bumped.
pub fn apply_child_flushes<A: AggregateRoot>(root: &mut A) -> bool {
    let id = root.id();
    let flushes = root.drain_child_flushes();
    let forced = flushes.iter().any(|flush| flush.forces_increment_of(&id));
    if forced {
        root.force_version_increment();
    }
    forced
}
