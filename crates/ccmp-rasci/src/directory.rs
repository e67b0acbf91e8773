//! # Key Personnel Directory
//!
//! Maps the 13 abstract role keys to concrete people. A role with no entry
//! (or with a blank person identifier) is unassigned — adoption simply
//! skips it, never errors.
//!
//! Each entry may carry a designated successor. Handing a role over
//! promotes the successor to holder in one step; the next adoption run then
//! reflects the change across every domain template.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ccmp_core::{PersonId, RoleKey};

/// One directory entry: the current holder and an optional successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    /// The person currently holding the role.
    pub holder: PersonId,
    /// Designated successor, if a hand-over is planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successor: Option<PersonId>,
}

/// The key personnel directory. One per tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDirectory {
    entries: HashMap<RoleKey, RoleEntry>,
}

impl RoleDirectory {
    /// Create an empty directory (every role unassigned).
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a person to a role. An existing successor designation for the
    /// role is preserved.
    pub fn assign(&mut self, role: RoleKey, person: PersonId) {
        self.entries
            .entry(role)
            .and_modify(|e| e.holder = person.clone())
            .or_insert(RoleEntry {
                holder: person,
                successor: None,
            });
    }

    /// Designate a successor for an assigned role. Returns `false` (and
    /// records nothing) if the role currently has no holder.
    pub fn designate_successor(&mut self, role: RoleKey, successor: PersonId) -> bool {
        match self.entries.get_mut(&role) {
            Some(entry) => {
                entry.successor = Some(successor);
                true
            }
            None => false,
        }
    }

    /// Promote the designated successor to holder, clearing the successor
    /// slot. Returns the new holder, or `None` if the role has no
    /// designated successor.
    pub fn hand_over(&mut self, role: RoleKey) -> Option<PersonId> {
        let entry = self.entries.get_mut(&role)?;
        let next = entry.successor.take()?;
        entry.holder = next.clone();
        Some(next)
    }

    /// Remove a role's entry entirely. Returns the removed entry, if any.
    pub fn clear(&mut self, role: RoleKey) -> Option<RoleEntry> {
        self.entries.remove(&role)
    }

    /// The person holding a role, if the role is assigned to someone with a
    /// non-blank identifier. Missing entries and blank holders are both
    /// "unassigned".
    pub fn person_for(&self, role: RoleKey) -> Option<&PersonId> {
        self.entries
            .get(&role)
            .map(|e| &e.holder)
            .filter(|p| !p.is_blank())
    }

    /// Full entry for a role, if present.
    pub fn entry(&self, role: RoleKey) -> Option<&RoleEntry> {
        self.entries.get(&role)
    }

    /// Number of roles with an assigned (non-blank) holder.
    pub fn assigned_count(&self) -> usize {
        RoleKey::all_roles()
            .iter()
            .filter(|r| self.person_for(**r).is_some())
            .count()
    }
}
