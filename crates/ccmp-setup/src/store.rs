//! # Setup Store — Visited Steps
//!
//! The one piece of state the setup wizard owns: which steps the user has
//! opened. Visitation is a set (order-independent, duplicate-safe) in
//! memory and an ordered list in the persisted form; the conversion between
//! the two is an explicit typed pair, not serialization middleware.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::step::StepKey;

/// Convert the in-memory visited set to its persisted form: an ordered
/// list following the wizard step order.
pub fn visited_to_ordered_list(visited: &HashSet<StepKey>) -> Vec<StepKey> {
    StepKey::all_steps()
        .iter()
        .filter(|s| visited.contains(s))
        .copied()
        .collect()
}

/// Convert a persisted visited list back to the in-memory set. Duplicates
/// in a hand-edited file collapse harmlessly.
pub fn ordered_list_to_visited(list: Vec<StepKey>) -> HashSet<StepKey> {
    list.into_iter().collect()
}

/// Persistable image of the setup store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSnapshot {
    /// Visited steps, in wizard order.
    pub visited: Vec<StepKey>,
}

/// Thread-safe owner of the visited-step set.
#[derive(Debug, Default)]
pub struct SetupStore {
    visited: Arc<RwLock<HashSet<StepKey>>>,
}

impl Clone for SetupStore {
    fn clone(&self) -> Self {
        Self {
            visited: Arc::clone(&self.visited),
        }
    }
}

impl SetupStore {
    /// Create a store with nothing visited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit. Returns `true` if the step was newly visited.
    pub fn mark_visited(&self, key: StepKey) -> bool {
        self.visited.write().insert(key)
    }

    /// Whether a step has been visited.
    pub fn was_visited(&self, key: StepKey) -> bool {
        self.visited.read().contains(&key)
    }

    /// Number of distinct visited steps.
    pub fn visited_count(&self) -> usize {
        self.visited.read().len()
    }

    /// Snapshot for persistence (ordered-list form).
    pub fn snapshot(&self) -> SetupSnapshot {
        SetupSnapshot {
            visited: visited_to_ordered_list(&self.visited.read()),
        }
    }

    /// Replace state from a persisted snapshot (set form in memory).
    pub fn restore(&self, snapshot: SetupSnapshot) {
        *self.visited.write() = ordered_list_to_visited(snapshot.visited);
    }
}
